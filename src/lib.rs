/// Portfolio catalog: read-only project portfolio service
///
/// This library provides the relational catalog of an agency's projects,
/// the JSON REST API over it and a typed client for presentational code.

// Core configuration and setup
pub mod config;

// Catalog layer - schema bootstrap, domain types and the read-only repository
pub mod catalog;

// HTTP API layer - REST endpoints with the uniform response envelope
pub mod api;

// Client layer - typed API client and state container for UI consumers
pub mod client;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use catalog::{Category, Project, ProjectRepository, RetrievalError};
pub use client::{ApiClient, ProjectsHook};
pub use server::start_server;
