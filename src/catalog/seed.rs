/// Demo catalog data
///
/// The catalog is normally populated by an external admin process. For local
/// development the server can insert this demo set into an empty database
/// (`PORTFOLIO_SEED_DEMO=true`). Tests reuse the same insert helpers to build
/// their fixtures.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnection, SqlitePool};

/// Category row to insert
#[derive(Debug, Clone)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub slug: &'a str,
    pub icon: &'a str,
    pub color: &'a str,
}

/// Project row to insert, with technologies linked by name
#[derive(Debug, Clone)]
pub struct NewProject<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub features: &'a [&'a str],
    pub media_url: &'a str,
    pub media_type: &'a str,
    pub aspect_ratio: &'a str,
    pub category_id: Option<i64>,
    pub featured: bool,
    pub sort_order: i64,
    pub external_url: Option<&'a str>,
    pub github_url: Option<&'a str>,
    /// Explicit creation time ("YYYY-MM-DD HH:MM:SS"); defaults to now
    pub created_at: Option<&'a str>,
    pub technologies: &'a [&'a str],
}

impl Default for NewProject<'_> {
    fn default() -> Self {
        Self {
            title: "",
            description: "",
            features: &[],
            media_url: "",
            media_type: "image",
            aspect_ratio: "16/9",
            category_id: None,
            featured: false,
            sort_order: 0,
            external_url: None,
            github_url: None,
            created_at: None,
            technologies: &[],
        }
    }
}

/// Insert a category and return its id
pub async fn insert_category(pool: &SqlitePool, category: &NewCategory<'_>) -> Result<i64> {
    let mut conn = pool.acquire().await?;
    write_category(&mut *conn, category).await
}

/// Insert a project, creating and linking its technologies, and return its id
pub async fn insert_project(pool: &SqlitePool, project: &NewProject<'_>) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let project_id = write_project(&mut *tx, project).await?;
    tx.commit().await?;

    Ok(project_id)
}

async fn write_category(conn: &mut SqliteConnection, category: &NewCategory<'_>) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO categories (name, description, slug, icon, color) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(category.name)
    .bind(category.description)
    .bind(category.slug)
    .bind(category.icon)
    .bind(category.color)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

async fn write_project(conn: &mut SqliteConnection, project: &NewProject<'_>) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO projects (
            title, description, features, media_url, media_type, aspect_ratio,
            category_id, featured, sort_order, external_url, github_url, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                COALESCE(?, CURRENT_TIMESTAMP), COALESCE(?, CURRENT_TIMESTAMP))
        "#,
    )
    .bind(project.title)
    .bind(project.description)
    .bind(project.features.join(","))
    .bind(project.media_url)
    .bind(project.media_type)
    .bind(project.aspect_ratio)
    .bind(project.category_id)
    .bind(project.featured)
    .bind(project.sort_order)
    .bind(project.external_url)
    .bind(project.github_url)
    .bind(project.created_at)
    .bind(project.created_at)
    .execute(&mut *conn)
    .await?;
    let project_id = result.last_insert_rowid();

    for name in project.technologies {
        sqlx::query("INSERT INTO technologies (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
            .bind(*name)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO project_technologies (project_id, technology_id)
            SELECT ?, id FROM technologies WHERE name = ?
            "#,
        )
        .bind(project_id)
        .bind(*name)
        .execute(&mut *conn)
        .await?;
    }

    Ok(project_id)
}

/// Insert the demo catalog into an empty store
///
/// Any existing category or project leaves the store untouched. The whole
/// set is written in one transaction. Returns the number of projects inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<usize> {
    let mut tx = pool.begin().await?;

    let (projects, categories): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM projects), (SELECT COUNT(*) FROM categories)",
    )
    .fetch_one(&mut *tx)
    .await?;
    if projects > 0 || categories > 0 {
        tracing::info!(
            "📦 Catalog already has {} projects and {} categories, skipping demo seed",
            projects,
            categories
        );
        return Ok(0);
    }

    tracing::info!("🌱 Seeding demo catalog");

    let mut inserted = 0;
    for (category, projects) in demo_catalog() {
        let category_id = write_category(&mut *tx, &category).await?;
        for mut project in projects {
            project.category_id = Some(category_id);
            write_project(&mut *tx, &project).await?;
            inserted += 1;
        }
    }

    tx.commit().await?;

    tracing::info!("✅ Seeded {} demo projects", inserted);

    Ok(inserted)
}

const PEXELS_ANALYTICS: &str =
    "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=1200";
const PEXELS_CODE: &str =
    "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=1200";
const PEXELS_SECURITY: &str =
    "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=1200";
const PEXELS_CIRCUIT: &str =
    "https://images.pexels.com/photos/2582937/pexels-photo-2582937.jpeg?auto=compress&cs=tinysrgb&w=1200";

fn demo_catalog() -> Vec<(NewCategory<'static>, Vec<NewProject<'static>>)> {
    vec![
        (
            NewCategory {
                name: "AI/ML Projects",
                description: "Machine learning models and intelligent systems",
                slug: "ai-ml-projects",
                icon: "brain",
                color: "purple",
            },
            vec![
                NewProject {
                    title: "Predictive Analytics Dashboard",
                    description: "Machine learning model for predicting customer behavior and sales trends with real-time visualization.",
                    features: &["Real-time predictions", "Interactive charts", "Data preprocessing", "Model training"],
                    media_url: PEXELS_ANALYTICS,
                    featured: true,
                    sort_order: 1,
                    created_at: Some("2024-03-01 09:00:00"),
                    technologies: &["Python", "TensorFlow", "React", "D3.js"],
                    ..Default::default()
                },
                NewProject {
                    title: "Computer Vision System",
                    description: "AI-powered image recognition system for quality control in manufacturing processes.",
                    features: &["Object detection", "Quality assessment", "Real-time processing", "API integration"],
                    media_url: PEXELS_CODE,
                    sort_order: 2,
                    created_at: Some("2024-02-14 09:00:00"),
                    technologies: &["OpenCV", "PyTorch", "Flask", "Docker"],
                    ..Default::default()
                },
                NewProject {
                    title: "Natural Language Processing API",
                    description: "Advanced NLP service for sentiment analysis, text classification, and language translation.",
                    features: &["Sentiment analysis", "Text classification", "Language detection", "RESTful API"],
                    media_url: PEXELS_CODE,
                    sort_order: 3,
                    created_at: Some("2024-01-20 09:00:00"),
                    technologies: &["BERT", "Transformers", "FastAPI", "PostgreSQL"],
                    ..Default::default()
                },
            ],
        ),
        (
            NewCategory {
                name: "Web Applications",
                description: "Full-stack web platforms and SaaS products",
                slug: "web-applications",
                icon: "globe",
                color: "cyan",
            },
            vec![
                NewProject {
                    title: "E-Commerce Platform",
                    description: "Scalable online storefront with inventory management and payment processing.",
                    features: &["Product catalog", "Payment gateway", "Order tracking", "Admin dashboard"],
                    media_url: PEXELS_CODE,
                    featured: true,
                    sort_order: 1,
                    created_at: Some("2024-02-28 09:00:00"),
                    technologies: &["React", "Node.js", "PostgreSQL", "Stripe"],
                    ..Default::default()
                },
                NewProject {
                    title: "Real-time Collaboration Suite",
                    description: "Document editing and chat workspace with live presence.",
                    features: &["Live editing", "Presence indicators", "Team chat", "Version history"],
                    media_url: PEXELS_ANALYTICS,
                    sort_order: 2,
                    created_at: Some("2024-01-05 09:00:00"),
                    technologies: &["TypeScript", "WebSocket", "Redis"],
                    ..Default::default()
                },
            ],
        ),
        (
            NewCategory {
                name: "Cyber Security",
                description: "Security tooling, audits and monitoring",
                slug: "cyber-security",
                icon: "shield",
                color: "red",
            },
            vec![
                NewProject {
                    title: "Network Security Scanner",
                    description: "Comprehensive network vulnerability scanner with automated reporting.",
                    features: &["Vulnerability detection", "Risk assessment", "Compliance reporting", "Real-time monitoring"],
                    media_url: PEXELS_SECURITY,
                    featured: true,
                    sort_order: 1,
                    created_at: Some("2024-03-10 09:00:00"),
                    technologies: &["Python", "Nmap", "Nessus API", "Django", "PostgreSQL"],
                    ..Default::default()
                },
                NewProject {
                    title: "Security Information Management",
                    description: "Centralized log analysis with threat detection and incident response.",
                    features: &["Log aggregation", "Threat detection", "Incident response", "Compliance monitoring"],
                    media_url: PEXELS_SECURITY,
                    sort_order: 2,
                    created_at: Some("2023-12-12 09:00:00"),
                    technologies: &["Elasticsearch", "Logstash", "Kibana", "Python", "Docker"],
                    ..Default::default()
                },
            ],
        ),
        (
            NewCategory {
                name: "IoT Projects",
                description: "Connected devices and sensor platforms",
                slug: "iot-projects",
                icon: "cpu",
                color: "green",
            },
            vec![NewProject {
                title: "Smart Home Hub",
                description: "Central controller for home automation with energy usage insights.",
                features: &["Device pairing", "Energy monitoring", "Automation rules", "Mobile control"],
                media_url: PEXELS_CIRCUIT,
                sort_order: 1,
                created_at: Some("2024-02-01 09:00:00"),
                technologies: &["Rust", "MQTT", "Raspberry Pi"],
                ..Default::default()
            }],
        ),
        (
            NewCategory {
                name: "Graphics Design",
                description: "Brand identity, motion and visual design work",
                slug: "graphics-design",
                icon: "palette",
                color: "pink",
            },
            vec![NewProject {
                title: "Brand Identity Reel",
                description: "Motion showcase of logo systems and brand guidelines.",
                features: &["Logo design", "Motion graphics", "Style guide"],
                media_url: "https://videos.pexels.com/video-files/3129671/3129671-uhd_2560_1440_30fps.mp4",
                media_type: "video",
                aspect_ratio: "9/16",
                sort_order: 1,
                created_at: Some("2023-11-18 09:00:00"),
                technologies: &["After Effects", "Illustrator"],
                ..Default::default()
            }],
        ),
    ]
}
