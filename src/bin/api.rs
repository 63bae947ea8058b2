//! Fundboard API Server
//!
//! Run with: cargo run --bin fundboard-api
//!
//! # Configuration
//!
//! Loaded from the first config file found (user config dir, /etc/fundboard,
//! ./config.toml), then overridden by environment variables:
//! - `FUNDBOARD_BACKEND_URL`: Funding backend base URL (default: http://localhost:9000)
//! - `FUNDBOARD_BACKEND_TIMEOUT_MS`: Backend request timeout (default: 10000)
//! - `FUNDBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FUNDBOARD_API_PORT`: Port to listen on (default: 8086)
//! - `FUNDBOARD_PAGE_SIZE`: Default table page size (default: 20)
//! - `RUST_LOG`: Log level (default: info)

use anyhow::Result;
use fundboard::api::{serve, AppState, ViewConfig};
use fundboard::client::{BackendClient, BackendConfig};
use fundboard::config::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fundboard=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fundboard API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load_default();
    let view_config = ViewConfig::from_config(&config);

    tracing::info!("Funding backend: {}", config.backend.base_url);
    tracing::info!("Default page size: {}", view_config.default_page_size);

    // Initialize the backend client
    let client = Arc::new(BackendClient::new(BackendConfig {
        base_url: config.backend.base_url.clone(),
        request_timeout_ms: config.backend.request_timeout_ms,
    }));

    // Check backend availability; a failed initial fetch renders the empty
    // state rather than aborting startup
    match client.health_check().await {
        Ok(_) => tracing::info!("Funding backend connection verified"),
        Err(e) => tracing::warn!("Funding backend not reachable: {} (views will show the empty state)", e),
    }

    let state = AppState::new(
        Arc::clone(&client) as Arc<dyn fundboard::client::RecordSource>,
        view_config.clone(),
    )
    .with_avatar_client(client);

    // Initial load before serving
    let summary = state.refresh().await;
    tracing::info!(
        rounds = ?summary.rounds_loaded,
        people = ?summary.people_loaded,
        duration_ms = summary.duration_ms,
        "Initial load complete"
    );

    // Run server
    tracing::info!("Starting server on {}", view_config.addr());
    serve(state, &view_config).await?;

    tracing::info!("Fundboard API server stopped");
    Ok(())
}
