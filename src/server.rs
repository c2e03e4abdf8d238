/// Server setup and initialization
///
/// Wires together the catalog database, repository and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_health_routes, create_project_routes, AppState},
    catalog::{database, seed, ProjectRepository},
    config::Config,
};
use anyhow::Result;
use axum::{http::Method, Router};
use sqlx::sqlite::SqlitePool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

/// Create the main Axum application with all routes and middleware
///
/// Opens the catalog database (creating the schema if needed), optionally
/// seeds the demo catalog and mounts the HTTP routes.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🏗️ Initializing catalog database");
    let pool = database::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open catalog database: {}", e))?;

    if config.database.seed_demo_data {
        seed::seed_demo_data(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed demo catalog: {}", e))?;
    }

    Ok(router(pool))
}

/// Build the router over an already-open pool
pub fn router(pool: SqlitePool) -> Router {
    let state = AppState {
        repository: ProjectRepository::new(pool),
    };

    // Browser front-ends are served from another origin; the API is read-only
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    tracing::info!("📡 Creating HTTP router with all endpoints");
    Router::new()
        // Health check endpoints
        .merge(create_health_routes())
        // Project catalog API routes
        .merge(create_project_routes().with_state(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting portfolio catalog server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
