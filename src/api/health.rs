/// Health check endpoints
///
/// `/healthz` is a plain liveness probe; `/api/health` answers with the
/// standard envelope so the API client can call it like any other endpoint.

use crate::api::envelope::Envelope;
use axum::{response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Create health check routes (stateless)
pub fn create_health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/health", get(api_health))
}

/// Simple liveness check that returns "ok"
async fn health_check() -> &'static str {
    "ok"
}

async fn api_health() -> Json<Envelope<HealthStatus>> {
    Json(Envelope::item(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    }))
}
