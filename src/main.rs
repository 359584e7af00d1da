//! Newsdesk service entry point.
//!
//! Initializes tracing, loads configuration, constructs the MongoDB-backed
//! store, and starts the HTTP server. A store that is unreachable at startup
//! is logged but not fatal; requests fail individually until connectivity
//! recovers. Failing to bind the listen port is fatal.

use std::sync::Arc;

use anyhow::{Context, Result};
use mongodb::Client;
use newsdesk_api::{start_server, AppState, Config};
use newsdesk_core::storage::{news, NewsStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting newsdesk service");

    let config = Config::load()?;
    info!(
        mongo_uri = %config.mongo_uri_masked(),
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    // The driver connects lazily; only a malformed URI fails here.
    let client = Client::with_uri_str(&config.mongo_uri)
        .await
        .context("Invalid MONGO_URI")?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(newsdesk_api::config::DEFAULT_DATABASE));

    let store: Arc<dyn NewsStore> =
        Arc::new(news::Repository::new(&database, config.store_timeout()));

    match store.ping().await {
        Ok(()) => info!("Document store connection verified"),
        Err(e) => warn!(
            error = %e,
            "Document store unreachable at startup; requests will fail until connectivity recovers"
        ),
    }

    let addr = config.server_addr()?;
    let state = AppState::new(store, &config);

    start_server(state, addr).await.context("HTTP server failed")?;

    info!("Newsdesk shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,newsdesk=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
