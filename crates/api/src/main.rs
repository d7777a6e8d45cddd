use anyhow::{Context, Result};
use domain::SystemClock;
use persistence::JsonFileStore;
use std::sync::Arc;
use tracing::info;

use rotation_tracker_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!(
        "Starting Rotation Tracker v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = Arc::new(JsonFileStore::new(&config.storage.data_file));
    info!(data_file = %store.path().display(), "Using JSON file store");

    // Build application
    let app = app::create_app(config.clone(), store, Arc::new(SystemClock));

    // Start server
    let addr = config
        .socket_addr()
        .context("invalid server host/port")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
