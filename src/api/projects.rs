/// Project catalog REST API endpoints
///
/// Thin read-only routes over `ProjectRepository`. Every response uses the
/// shared envelope; repository failures become 500, missing projects 404.

use crate::{
    api::envelope::{ApiError, Envelope},
    catalog::{Category, Project, ProjectRepository},
};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog queries
    pub repository: ProjectRepository,
}

/// Create project catalog routes
///
/// The static `categories/all` route sits beside `{id}` at a different
/// depth, so the two never shadow each other.
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/projects/category/{category_id}", get(list_projects_by_category))
        .route("/api/projects/search/{query}", get(search_projects))
        .route("/api/projects/categories/all", get(list_categories))
        .route("/api/projects/{id}", get(get_project))
}

/// Path ids are not validated: text that is not an integer can never match
/// an integer key, so it is treated as "no match".
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// List all projects
///
/// GET /api/projects
async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Project>>>, ApiError> {
    let projects = state.repository.get_all().await?;
    tracing::info!("📤 Listing {} projects", projects.len());
    Ok(Json(Envelope::list(projects)))
}

/// List projects of one category (possibly empty)
///
/// GET /api/projects/category/{category_id}
async fn list_projects_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Envelope<Vec<Project>>>, ApiError> {
    let projects = match parse_id(&category_id) {
        Some(id) => state.repository.get_by_category(id).await?,
        None => {
            tracing::debug!("Category id '{}' is not numeric, no projects can match", category_id);
            Vec::new()
        }
    };
    Ok(Json(Envelope::list(projects)))
}

/// Get a single project
///
/// GET /api/projects/{id}
async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Project>>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::NotFound);
    };

    match state.repository.get_by_id(id).await? {
        Some(project) => Ok(Json(Envelope::item(project))),
        None => {
            tracing::debug!("🔍 Project {} not found", id);
            Err(ApiError::NotFound)
        }
    }
}

/// Search projects by title, description or features
///
/// GET /api/projects/search/{query}  (query arrives URL-decoded)
async fn search_projects(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Envelope<Vec<Project>>>, ApiError> {
    let projects = state.repository.search(&query).await?;
    Ok(Json(Envelope::list(projects)))
}

/// List all categories with live project counts
///
/// GET /api/projects/categories/all
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Category>>>, ApiError> {
    let categories = state.repository.get_categories().await?;
    Ok(Json(Envelope::list(categories)))
}
