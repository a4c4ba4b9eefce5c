//! Restaurant analytics HTTP server binary.
//!
//! This is the main entry point for the analytics REST API server.
//! It loads the repository configuration, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve the JSON files in ./data (default)
//! cargo run --bin analytics-server
//!
//! # Serve another data directory with a short cache lifetime
//! DATA_DIR=/srv/analytics CACHE_TTL_SECS=60 cargo run --bin analytics-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `REPOSITORY_TYPE`: `json` (default) or `local`
//! - `DATA_DIR`: Directory holding `restaurants.json` and `orders.json`
//! - `CACHE_TTL_SECS`: Dataset cache lifetime in seconds (default: 3600)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use restaurant_analytics::db::{self, RepositoryConfig, RepositoryFactory};
use restaurant_analytics::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting restaurant analytics server");

    let config = RepositoryConfig::load()?;
    let repository = RepositoryFactory::from_config(&config)?;
    match db::health_check(repository.as_ref()).await {
        Ok(true) => info!("Data source '{}' is ready", repository.source_name()),
        Ok(false) => warn!(
            "Data source '{}' is not ready; requests will fail until it is",
            repository.source_name()
        ),
        Err(e) => warn!("Data source health check failed: {}", e),
    }

    let state = AppState::new(repository);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
