/// HTTP API Layer
///
/// REST endpoints over the project catalog. It handles:
/// - Project listing, category filtering, lookup and search
/// - Category listing with live counts
/// - Health checks
/// - The uniform `{success, data, count, message}` envelope

// Response envelope and error-to-status mapping
pub mod envelope;

// Liveness and enveloped health checks
pub mod health;

// Read-only project catalog endpoints
pub mod projects;

// Re-export router builders
pub use envelope::{ApiError, Envelope};
pub use health::{create_health_routes, HealthStatus};
pub use projects::{create_project_routes, AppState};
