//! HTTP server configuration and request routing.
//!
//! Assembles the router, applies the middleware stack, and serves requests
//! with graceful shutdown. Requests flow through middleware in order:
//! request-id injection, request/response tracing, timeout enforcement,
//! CORS, then (write path only) the API-key gate before the handler.

use std::net::SocketAddr;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::middleware::auth::require_api_key;
use crate::{handlers, AppState};

/// Creates the router with all routes and middleware.
///
/// `GET /news` and the health probes are unauthenticated; `POST /news`
/// passes through the API-key gate before the body is read. Everything else
/// falls through to the framework's not-found handling.
pub fn create_router(state: AppState) -> Router {
    let read_routes = Router::new()
        .route("/news", get(handlers::list_news))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/live", get(handlers::liveness_check));

    let write_routes = Router::new()
        .route("/news", post(handlers::create_news))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    // The original service is CORS-open to any origin.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .merge(read_routes)
        .merge(write_routes)
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

/// Middleware injecting an `X-Request-Id` header into every response.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}

/// Starts the HTTP server with graceful shutdown support.
///
/// # Errors
///
/// Returns `std::io::Error` when the port is already in use or the network
/// interface is unavailable; the caller exits non-zero on either.
pub async fn start_server(state: AppState, addr: SocketAddr) -> Result<(), std::io::Error> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("HTTP server listening on {}", actual_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("HTTP server stopped gracefully");
    Ok(())
}

/// Waits for CTRL+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
