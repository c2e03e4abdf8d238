/// Configuration management for the portfolio catalog
///
/// Handles server binding, the catalog database connection and the base URL
/// used by the typed API client.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// API client configuration
    pub client: ClientConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Catalog database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (default: "sqlite://data/portfolio.db")
    pub url: String,
    /// Upper bound on pooled connections, i.e. simultaneous queries
    pub max_connections: u32,
    /// Insert the demo catalog when the projects table is empty
    pub seed_demo_data: bool,
}

/// Typed API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix (e.g., "http://localhost:5000/api")
    pub api_base_url: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("PORTFOLIO_HOST", "0.0.0.0"),
                port: env_or("PORTFOLIO_PORT", "5000").parse().unwrap_or(5000),
            },
            database: DatabaseConfig {
                url: env_or("PORTFOLIO_DATABASE_URL", "sqlite://data/portfolio.db"),
                max_connections: env_or("PORTFOLIO_DB_MAX_CONNECTIONS", "5")
                    .parse()
                    .unwrap_or(5),
                seed_demo_data: parse_flag(&env_or("PORTFOLIO_SEED_DEMO", "false")),
            },
            client: ClientConfig {
                api_base_url: env_or("PORTFOLIO_API_BASE_URL", "http://localhost:5000/api"),
            },
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Accepts the usual truthy spellings ("1", "true", "yes", "on")
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
