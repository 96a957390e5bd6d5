//! # Project Tracker Main Entry Point
//!
//! Initializes logging, loads configuration, builds the in-memory store and
//! serves the HTTP API until Ctrl-C.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use project_tracker::api::ApiService;
use project_tracker::config::{Config, DEFAULT_LOG_FILTER};
use project_tracker::database::memory::InMemoryStore;
use project_tracker::database::repository::ProjectRepository;
use project_tracker::services::clock::SystemClock;
use project_tracker::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; RUST_LOG may come from .env
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Project Tracker v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, Demo data: {}",
        config.http_port, config.seed_demo_data
    );

    let store = if config.seed_demo_data {
        InMemoryStore::with_demo_data()
    } else {
        InMemoryStore::new()
    };
    let repo: Arc<dyn ProjectRepository> = Arc::new(store);

    let api = ApiService::new(repo, Arc::new(SystemClock));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("API listening on http://localhost:{}", config.http_port);

    axum::serve(listener, api.router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log_system_event("Application stopped", None);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log_system_event("Shutdown signal received", None);
}
