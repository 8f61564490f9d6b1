//! Task tracker service binary.
//!
//! Standalone HTTP service exposing task CRUD over the configured
//! storage backend.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::config::Config;
use api::server::{self, AppState};
use tracker::{storage, TaskService};

#[tokio::main]
async fn main() -> Result<()> {
    // Variables from a local .env file apply before the config is read
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Starting task tracker service...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Build the storage backend and make sure it is usable before serving
    let storage = storage::from_config(&config.storage).context("Failed to build storage")?;
    storage
        .initialize()
        .await
        .context("Failed to initialize storage")?;

    info!(storage = storage.storage_type(), "Storage backend ready");

    // Build application state and router
    let state = AppState {
        service: Arc::new(TaskService::new(storage)),
    };
    let app = server::build_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(port = config.port, "Task tracker service listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
