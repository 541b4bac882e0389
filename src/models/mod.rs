// Data models for Lolzteam Market API entities

pub mod responses;
pub mod user;

pub use responses::{ApiErrorBody, MeResponse};
pub use user::User;
