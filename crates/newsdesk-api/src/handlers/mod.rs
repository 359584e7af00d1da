//! Request handlers.

pub mod health;
pub mod news;

pub use health::{health_check, liveness_check, readiness_check};
pub use news::{create_news, list_news};
