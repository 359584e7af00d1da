//! Shared-secret authorization for the write path.
//!
//! The credential is read from the `x-api-key` header, falling back to the
//! `api_key` query parameter; the header wins when both are present.
//! Comparison is exact string equality against the single configured
//! secret. Deny short-circuits before the request body is touched.

use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;

use crate::error::ApiError;
use crate::AppState;

/// Header carrying the write-path credential.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Deserialize)]
struct KeyParam {
    api_key: Option<String>,
}

/// Extracts the presented credential from the request, header first.
fn presented_key(req: &Request) -> Option<String> {
    if let Some(value) = req.headers().get(API_KEY_HEADER) {
        return value.to_str().ok().map(String::from);
    }

    Query::<KeyParam>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(params)| params.api_key)
}

/// Axum middleware gating requests on the configured API key.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match presented_key(&req) {
        Some(key) if *key == *state.api_key => Ok(next.run(req).await),
        _ => Err(ApiError::Unauthorized),
    }
}
