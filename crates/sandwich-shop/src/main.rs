//! # Sandwich Shop Server
//!
//! ```bash
//! sandwich-shop --config config.toml
//! RUST_LOG=debug sandwich-shop    # full payloads from the actors
//! ```

use anyhow::Context;
use resource_actor::setup_tracing;
use sandwich_shop::api::create_app;
use sandwich_shop::config::Config;
use sandwich_shop::lifecycle::ShopSystem;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
        .unwrap_or("config.toml");

    let config = Config::from_file(config_path)?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);
    info!(config_path, ?config, "Starting sandwich shop");

    let system = ShopSystem::from_config(&config)
        .await
        .with_context(|| format!("Failed to open database '{}'", config.database_url))?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, create_app(&system))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    system
        .shutdown()
        .await
        .context("Actor task failed during shutdown")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
