//! Error types for document-store operations.
//!
//! Every store failure surfaces as a `StoreError` carrying the underlying
//! message. The HTTP layer decides the status code (500 on reads, 400 on
//! writes); nothing here crashes the process.

use thiserror::Error;

/// Result type alias using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure from the document-store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity or query failure reported by the driver.
    #[error("database error: {0}")]
    Database(String),

    /// A store operation exceeded its timeout budget.
    #[error("store operation timed out after {0}s")]
    Timeout(u64),

    /// The document could not be serialized or carries an invalid identifier.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(err.to_string())
    }
}
