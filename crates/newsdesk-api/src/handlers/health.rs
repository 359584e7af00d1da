//! Health endpoints for service monitoring.
//!
//! `/health` and `/ready` probe store connectivity; `/live` only confirms
//! the process is serving requests.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::AppState;

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service health.
    pub status: HealthStatus,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
    /// Component checks.
    pub checks: HealthChecks,
    /// Service version.
    pub version: String,
}

/// Overall health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All components operational.
    Healthy,
    /// The store is unreachable.
    Unhealthy,
}

/// Individual component checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Document store connectivity.
    pub store: ComponentHealth,
}

/// Health of a single component.
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    /// Component status.
    pub status: ComponentStatus,
    /// Failure detail, when down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Probe duration in milliseconds.
    pub response_time_ms: u64,
}

/// Component-level status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// Component is reachable.
    Up,
    /// Component is unreachable.
    Down,
}

/// Store-connectivity health check for `GET /health`.
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let store = match state.store.ping().await {
        Ok(()) => ComponentHealth {
            status: ComponentStatus::Up,
            message: None,
            response_time_ms: elapsed_ms(started),
        },
        Err(e) => ComponentHealth {
            status: ComponentStatus::Down,
            message: Some(e.to_string()),
            response_time_ms: elapsed_ms(started),
        },
    };

    let (status, code) = match store.status {
        ComponentStatus::Up => (HealthStatus::Healthy, StatusCode::OK),
        ComponentStatus::Down => (HealthStatus::Unhealthy, StatusCode::SERVICE_UNAVAILABLE),
    };

    debug!(status = ?status, "Health check completed");

    let response = HealthResponse {
        status,
        timestamp: Utc::now(),
        checks: HealthChecks { store },
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (code, Json(response)).into_response()
}

/// Readiness probe for `GET /ready`; same checks as `/health`.
#[instrument(name = "readiness_check", skip(state))]
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    health_check(State(state)).await
}

/// Process liveness probe for `GET /live`; no external dependencies probed.
#[instrument(name = "liveness_check")]
pub async fn liveness_check() -> Response {
    let body = serde_json::json!({
        "status": "alive",
        "timestamp": Utc::now(),
        "service": "newsdesk-api",
    });

    (StatusCode::OK, Json(body)).into_response()
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
