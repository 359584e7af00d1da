//! API error taxonomy and HTTP response mapping.
//!
//! Every handler failure is converted to a status code here; no error
//! escapes to crash the process. Bodies are always `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use newsdesk_core::StoreError;
use thiserror::Error;

/// Application-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query parameters could not be interpreted.
    #[error("{0}")]
    InvalidQuery(String),

    /// The request body is not a valid news draft.
    #[error("{0}")]
    InvalidBody(String),

    /// Missing or incorrect write-path credential.
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// The store failed while serving a read.
    #[error("{0}")]
    ReadFailed(#[source] StoreError),

    /// The store rejected a write.
    #[error("{0}")]
    WriteRejected(#[source] StoreError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuery(_) | Self::InvalidBody(_) | Self::WriteRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ReadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
