/// Portfolio catalog server
///
/// Main entry point. Loads configuration from the environment and starts
/// the HTTP server.

use portfolio_catalog::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Project catalog API at /api/projects/*
/// - Enveloped health check at /api/health
/// - Liveness probe at /healthz
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (defaults to 0.0.0.0:5000 and data/portfolio.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
