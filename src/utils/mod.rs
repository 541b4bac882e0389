pub mod errors;
pub mod format;
pub mod http;
pub mod image_loader;
pub mod notification;
pub mod text;
pub mod theme;

pub use notification::NotificationManager;
pub use text::{initial, mask_token};
