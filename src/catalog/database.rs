/// Catalog database bootstrap
///
/// Opens the SQLite connection pool and makes sure the four catalog tables
/// exist. Records are managed externally; this module never writes rows
/// (demo data lives in `seed`).

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the catalog pool described by `config`
///
/// Creates the parent directory and the database file on first use, then
/// runs the idempotent schema bootstrap.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| anyhow::anyhow!("Invalid database URL '{}': {}", config.url, e))?
        .create_if_missing(true)
        .foreign_keys(true);

    let filename = options.get_filename();
    if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create database directory '{}': {}", parent.display(), e)
        })?;
    }

    tracing::info!("🗄️ Opening catalog database: {}", filename.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    tracing::info!("✅ Catalog database ready");

    Ok(pool)
}

/// Initialize catalog schema
///
/// Safe to call multiple times (uses IF NOT EXISTS).
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT '',
            slug TEXT NOT NULL UNIQUE,
            icon TEXT NOT NULL DEFAULT '',
            color TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            features TEXT NOT NULL DEFAULT '',
            media_url TEXT NOT NULL DEFAULT '',
            media_type TEXT NOT NULL DEFAULT 'image' CHECK (media_type IN ('image', 'video')),
            aspect_ratio TEXT NOT NULL DEFAULT '16/9',
            category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
            status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'inactive', 'archived')),
            featured BOOLEAN NOT NULL DEFAULT 0,
            sort_order INTEGER NOT NULL DEFAULT 0,
            external_url TEXT,
            github_url TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS technologies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Duplicate links are allowed; the aggregation passes them through
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS project_technologies (
            project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            technology_id INTEGER NOT NULL REFERENCES technologies(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for the join and filter paths
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_category ON projects(category_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_created_at ON projects(created_at)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_project_technologies_project ON project_technologies(project_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
