/// Shared fixtures for catalog, API and client tests.

use crate::catalog::database::init_schema;
use crate::catalog::seed::{insert_category, insert_project, NewCategory, NewProject};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Fresh in-memory catalog. One connection so every query sees the same database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

/// Ids of the rows inserted by [`seeded_pool`]
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub security: i64,
    pub design: i64,
    pub empty_category: i64,
    pub scanner: i64,
    pub graphics: i64,
    pub firewall: i64,
}

/// Catalog with three categories and three projects:
///
/// * "Cyber Security Scanner" (security, newest)
/// * "Graphics Suite" (design, oldest)
/// * "Firewall Audit" (security, "cyber" only in its features)
pub async fn seeded_pool() -> (SqlitePool, Fixture) {
    let pool = memory_pool().await;

    let security = insert_category(
        &pool,
        &NewCategory {
            name: "Security",
            description: "Security work",
            slug: "security",
            icon: "shield",
            color: "red",
        },
    )
    .await
    .unwrap();
    let design = insert_category(
        &pool,
        &NewCategory {
            name: "Design",
            description: "Design work",
            slug: "design",
            icon: "palette",
            color: "pink",
        },
    )
    .await
    .unwrap();
    let empty_category = insert_category(
        &pool,
        &NewCategory {
            name: "Archive",
            description: "Nothing here yet",
            slug: "archive",
            icon: "box",
            color: "gray",
        },
    )
    .await
    .unwrap();

    let scanner = insert_project(
        &pool,
        &NewProject {
            title: "Cyber Security Scanner",
            description: "Finds open ports",
            features: &["Port scan", "Reports"],
            category_id: Some(security),
            created_at: Some("2024-03-01 10:00:00"),
            technologies: &["Rust", "Nmap"],
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let graphics = insert_project(
        &pool,
        &NewProject {
            title: "Graphics Suite",
            description: "Vector editing for print",
            features: &["Layers", "Export"],
            media_type: "video",
            category_id: Some(design),
            created_at: Some("2024-01-01 10:00:00"),
            technologies: &["Illustrator"],
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let firewall = insert_project(
        &pool,
        &NewProject {
            title: "Firewall Audit",
            description: "Rule review for enterprise networks",
            features: &["CYBER hygiene checklist"],
            category_id: Some(security),
            created_at: Some("2024-02-01 10:00:00"),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    (
        pool,
        Fixture {
            security,
            design,
            empty_category,
            scanner,
            graphics,
            firewall,
        },
    )
}
