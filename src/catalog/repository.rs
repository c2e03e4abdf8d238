/// Read-only project repository
///
/// Every project query joins Project → Category and Project → join table →
/// Technology, then groups back to one row per project. Store failures are
/// reported as `RetrievalError`; nothing is retried.

use crate::catalog::error::{RetrievalError, RetrievalResult};
use crate::catalog::types::{Category, Project};
use sqlx::sqlite::SqlitePool;

/// Enriched project projection. Filters are spliced in before GROUP BY.
const PROJECT_SELECT: &str = r#"
    SELECT
        p.*,
        c.name AS category_name,
        c.description AS category_description,
        COALESCE(GROUP_CONCAT(t.name, ',' ORDER BY t.name), '') AS technologies
    FROM projects p
    LEFT JOIN categories c ON p.category_id = c.id
    LEFT JOIN project_technologies pt ON p.id = pt.project_id
    LEFT JOIN technologies t ON pt.technology_id = t.id
"#;

const PROJECT_GROUP: &str = "GROUP BY p.id";

/// Newest first; id breaks ties between rows created in the same second
const PROJECT_ORDER: &str = "ORDER BY p.created_at DESC, p.id DESC";

const CATEGORY_SELECT: &str = r#"
    SELECT c.*, COUNT(p.id) AS project_count
    FROM categories c
    LEFT JOIN projects p ON c.id = p.category_id
    GROUP BY c.id
    ORDER BY c.name
"#;

fn project_query(filter: Option<&str>, ordered: bool) -> String {
    let mut sql = String::from(PROJECT_SELECT);
    if let Some(filter) = filter {
        sql.push_str(" WHERE ");
        sql.push_str(filter);
    }
    sql.push(' ');
    sql.push_str(PROJECT_GROUP);
    if ordered {
        sql.push(' ');
        sql.push_str(PROJECT_ORDER);
    }
    sql
}

/// Escape LIKE wildcards so the query is matched as a literal substring
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Repository over the catalog tables
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All projects, newest first
    pub async fn get_all(&self) -> RetrievalResult<Vec<Project>> {
        let sql = project_query(None, true);

        let projects = sqlx::query_as::<_, Project>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RetrievalError::from_store("Error fetching projects", e))?;

        tracing::debug!("📋 Fetched {} projects", projects.len());
        Ok(projects)
    }

    /// Projects in one category, newest first. Unknown ids yield an empty list.
    pub async fn get_by_category(&self, category_id: i64) -> RetrievalResult<Vec<Project>> {
        let sql = project_query(Some("p.category_id = ?"), true);

        let projects = sqlx::query_as::<_, Project>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RetrievalError::from_store("Error fetching projects by category", e))?;

        tracing::debug!("📋 Fetched {} projects for category {}", projects.len(), category_id);
        Ok(projects)
    }

    /// Single project; `None` when no row matches
    pub async fn get_by_id(&self, id: i64) -> RetrievalResult<Option<Project>> {
        let sql = project_query(Some("p.id = ?"), false);

        sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RetrievalError::from_store("Error fetching project", e))
    }

    /// All categories alphabetically, each with a live project count
    pub async fn get_categories(&self) -> RetrievalResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(CATEGORY_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RetrievalError::from_store("Error fetching categories", e))?;

        tracing::debug!("📋 Fetched {} categories", categories.len());
        Ok(categories)
    }

    /// Case-insensitive substring search over title, description and features
    pub async fn search(&self, query: &str) -> RetrievalResult<Vec<Project>> {
        let sql = project_query(
            Some(
                r"(p.title LIKE ? ESCAPE '\' OR p.description LIKE ? ESCAPE '\' OR p.features LIKE ? ESCAPE '\')",
            ),
            true,
        );
        let pattern = like_pattern(query);

        let projects = sqlx::query_as::<_, Project>(&sql)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RetrievalError::from_store("Error searching projects", e))?;

        tracing::debug!("🔍 Search '{}' matched {} projects", query, projects.len());
        Ok(projects)
    }
}
