//! # scorebook-server
//!
//! Serves the statistics site, the dataset and the workbook upload endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use scorebook_core::DatasetStore;
use scorebook_server::{create_router, AppState, ServerConfig, DEFAULT_LOG_FILTER};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let store = Arc::new(DatasetStore::new(&config.data_file));
    tracing::info!(
        data_file = %store.path().display(),
        site_dir = %config.site_dir.display(),
        "Loaded server configuration"
    );
    store.load();

    let app = create_router(AppState::new(store), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "scorebook-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl-C, shutting down");
}
