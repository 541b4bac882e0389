// Remote API clients

pub mod gemini;
pub mod market;

pub use gemini::{generate_text, GeminiConfig};
pub use market::fetch_me;
