//! Newsdesk HTTP API.
//!
//! Routing, query interpretation, authorization gating, and error mapping
//! for the news collection. The store is injected as a trait object so the
//! router can be exercised in tests without a live MongoDB.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;
use std::time::Duration;

use newsdesk_core::NewsStore;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use server::{create_router, start_server};

/// Shared application state.
///
/// Cheap to clone; the store handle and the configured secret are the only
/// cross-request state, and both are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the news store.
    pub store: Arc<dyn NewsStore>,
    /// Write-path shared secret.
    pub api_key: Arc<str>,
    /// Router-level request timeout.
    pub request_timeout: Duration,
}

impl AppState {
    /// Builds the state from an already-constructed store and configuration.
    pub fn new(store: Arc<dyn NewsStore>, config: &Config) -> Self {
        Self {
            store,
            api_key: config.api_key.as_str().into(),
            request_timeout: config.request_timeout(),
        }
    }
}
