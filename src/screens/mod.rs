pub mod checker;

pub use checker::CheckerApp;
