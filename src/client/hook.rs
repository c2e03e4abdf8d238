/// Client-side catalog state container
///
/// Tracks `loading / error / data` for one consumer (a page or widget) and
/// exposes the fetch operations that drive it. The view layer reads cheap
/// immutable snapshots; the methods below are the only way to change state.
///
/// State machine per instance: `idle -> loading -> (success | error)`, and
/// back to `loading` on every new projects fetch. Calls are not cancellable:
/// when two fetches overlap, whichever resolves last wins.

use crate::catalog::{Category, Project};
use crate::client::api::{ApiClient, ClientError};
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::sync::Arc;

const FETCH_PROJECTS_FAILED: &str = "Failed to fetch projects";
const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch categories";
const SEARCH_FAILED: &str = "Failed to search projects";

/// Where the hook gets its data from
///
/// `ApiClient` is the production implementation; tests plug in fakes.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn all_projects(&self) -> Result<Vec<Project>, ClientError>;
    async fn projects_by_category(&self, category_id: i64) -> Result<Vec<Project>, ClientError>;
    async fn project(&self, id: i64) -> Result<Project, ClientError>;
    async fn search_projects(&self, query: &str) -> Result<Vec<Project>, ClientError>;
    async fn categories(&self) -> Result<Vec<Category>, ClientError>;
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn all_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.get_all_projects().await
    }

    async fn projects_by_category(&self, category_id: i64) -> Result<Vec<Project>, ClientError> {
        self.get_projects_by_category(category_id).await
    }

    async fn project(&self, id: i64) -> Result<Project, ClientError> {
        self.get_project(id).await
    }

    async fn search_projects(&self, query: &str) -> Result<Vec<Project>, ClientError> {
        ApiClient::search_projects(self, query).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get_categories().await
    }
}

/// Snapshot of the hook's state as seen by the view layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub projects: Vec<Project>,
    pub categories: Vec<Category>,
    /// True while a projects request is in flight
    pub loading: bool,
    /// Message of the last failure; cleared by the next successful projects fetch
    pub error: Option<String>,
}

impl CatalogState {
    /// Category with the given slug, if loaded
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }
}

/// Catalog state container bound to one data source
pub struct ProjectsHook<S> {
    source: S,
    state: ArcSwap<CatalogState>,
}

impl<S: CatalogSource> ProjectsHook<S> {
    /// Create an idle hook; nothing is fetched until `initialize` or a fetch call
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ArcSwap::from_pointee(CatalogState::default()),
        }
    }

    /// Current state (lock-free read)
    pub fn snapshot(&self) -> Arc<CatalogState> {
        self.state.load_full()
    }

    /// First-mount load: all projects and all categories, fetched concurrently
    ///
    /// Each request applies its own result as soon as it resolves, so a slow
    /// or failing categories call never holds back the project list.
    pub async fn initialize(&self) {
        tokio::join!(self.fetch_projects(), self.fetch_categories());
    }

    /// Re-run the all-projects fetch
    pub async fn fetch_projects(&self) {
        self.begin_loading();
        let result = self.source.all_projects().await;
        self.resolve_projects(result, FETCH_PROJECTS_FAILED);
    }

    /// Alias kept for consumers that expose a "retry" action
    pub async fn refetch(&self) {
        self.fetch_projects().await
    }

    /// Reload categories; does not touch `loading`
    pub async fn fetch_categories(&self) {
        let result = self.source.categories().await;
        self.resolve_categories(result);
    }

    /// Replace the project list with one category's projects
    pub async fn fetch_projects_by_category(&self, category_id: i64) {
        self.begin_loading();
        let result = self.source.projects_by_category(category_id).await;
        self.resolve_projects(result, FETCH_PROJECTS_FAILED);
    }

    /// Same as `fetch_projects_by_category`, addressed by the category's slug
    ///
    /// Categories must already be loaded; an unknown slug is reported through
    /// `error` and leaves the project list untouched.
    pub async fn fetch_projects_by_category_slug(&self, slug: &str) {
        let category_id = self.snapshot().category_by_slug(slug).map(|c| c.id);

        match category_id {
            Some(id) => self.fetch_projects_by_category(id).await,
            None => {
                tracing::warn!("Unknown category slug '{}'", slug);
                let message = format!("Unknown category: {slug}");
                self.update(|state| state.error = Some(message.clone()));
            }
        }
    }

    /// Replace the project list with search results
    pub async fn search_projects(&self, query: &str) {
        self.begin_loading();
        let result = self.source.search_projects(query).await;
        self.resolve_projects(result, SEARCH_FAILED);
    }

    /// Load one project for a detail view
    ///
    /// The project list is not replaced. On failure `error` is set and `None`
    /// returned.
    pub async fn fetch_project(&self, id: i64) -> Option<Project> {
        match self.source.project(id).await {
            Ok(project) => Some(project),
            Err(e) => {
                let message = error_message(&e, FETCH_PROJECTS_FAILED);
                self.update(|state| state.error = Some(message.clone()));
                None
            }
        }
    }

    fn begin_loading(&self) {
        self.update(|state| state.loading = true);
    }

    fn resolve_projects(&self, result: Result<Vec<Project>, ClientError>, fallback: &str) {
        match result {
            Ok(projects) => self.update(|state| {
                state.projects = projects.clone();
                state.error = None;
                state.loading = false;
            }),
            Err(e) => {
                let message = error_message(&e, fallback);
                self.update(|state| {
                    state.error = Some(message.clone());
                    state.loading = false;
                });
            }
        }
    }

    fn resolve_categories(&self, result: Result<Vec<Category>, ClientError>) {
        match result {
            Ok(categories) => self.update(|state| state.categories = categories.clone()),
            Err(e) => {
                let message = error_message(&e, FETCH_CATEGORIES_FAILED);
                self.update(|state| state.error = Some(message.clone()));
            }
        }
    }

    /// Copy-on-write update; `f` may run more than once under contention
    fn update(&self, mut f: impl FnMut(&mut CatalogState)) {
        self.state.rcu(|current| {
            let mut next = CatalogState::clone(current);
            f(&mut next);
            next
        });
    }
}

fn error_message(error: &ClientError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MediaType, ProjectStatus};
    use chrono::NaiveDate;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn project(id: i64, title: &str, category_id: i64) -> Project {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            features: String::new(),
            media_url: String::new(),
            media_type: MediaType::Image,
            aspect_ratio: "16/9".to_string(),
            category_id: Some(category_id),
            status: ProjectStatus::Active,
            featured: false,
            sort_order: 0,
            external_url: None,
            github_url: None,
            created_at: at,
            updated_at: at,
            category_name: None,
            category_description: None,
            technologies: String::new(),
        }
    }

    fn category(id: i64, slug: &str) -> Category {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Category {
            id,
            name: slug.to_uppercase(),
            description: String::new(),
            slug: slug.to_string(),
            icon: String::new(),
            color: String::new(),
            project_count: 0,
            created_at: at,
            updated_at: at,
        }
    }

    /// In-memory source with switchable failures and an optional gate that
    /// holds category-scoped requests until released.
    #[derive(Default)]
    struct FakeSource {
        projects: Vec<Project>,
        categories: Vec<Category>,
        fail_projects: Mutex<bool>,
        fail_categories: bool,
        gate: Option<Arc<Notify>>,
        categories_gate: Option<Arc<Notify>>,
    }

    fn unavailable() -> ClientError {
        ClientError::Status(StatusCode::SERVICE_UNAVAILABLE)
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn all_projects(&self) -> Result<Vec<Project>, ClientError> {
            if *self.fail_projects.lock().unwrap() {
                return Err(unavailable());
            }
            Ok(self.projects.clone())
        }

        async fn projects_by_category(
            &self,
            category_id: i64,
        ) -> Result<Vec<Project>, ClientError> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if *self.fail_projects.lock().unwrap() {
                return Err(unavailable());
            }
            Ok(self
                .projects
                .iter()
                .filter(|p| p.category_id == Some(category_id))
                .cloned()
                .collect())
        }

        async fn project(&self, id: i64) -> Result<Project, ClientError> {
            self.projects
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(ClientError::Status(StatusCode::NOT_FOUND))
        }

        async fn search_projects(&self, query: &str) -> Result<Vec<Project>, ClientError> {
            let query = query.to_lowercase();
            Ok(self
                .projects
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&query))
                .cloned()
                .collect())
        }

        async fn categories(&self) -> Result<Vec<Category>, ClientError> {
            if let Some(gate) = &self.categories_gate {
                gate.notified().await;
            }
            if self.fail_categories {
                return Err(unavailable());
            }
            Ok(self.categories.clone())
        }
    }

    fn catalog() -> FakeSource {
        FakeSource {
            projects: vec![
                project(1, "Cyber Security Scanner", 10),
                project(2, "Graphics Suite", 20),
                project(3, "Smart Home Hub", 30),
            ],
            categories: vec![category(10, "security"), category(20, "design"), category(30, "iot")],
            ..Default::default()
        }
    }

    #[test]
    fn test_new_hook_is_idle() {
        let hook = ProjectsHook::new(catalog());
        assert_eq!(*hook.snapshot(), CatalogState::default());
    }

    #[tokio::test]
    async fn test_initialize_loads_projects_and_categories() {
        let hook = ProjectsHook::new(catalog());
        hook.initialize().await;

        let state = hook.snapshot();
        assert_eq!(state.projects.len(), 3);
        assert_eq!(state.categories.len(), 3);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_pending_categories_do_not_hold_back_projects() {
        let gate = Arc::new(Notify::new());
        let hook = Arc::new(ProjectsHook::new(FakeSource {
            fail_categories: true,
            categories_gate: Some(Arc::clone(&gate)),
            ..catalog()
        }));

        let task = {
            let hook = Arc::clone(&hook);
            tokio::spawn(async move { hook.initialize().await })
        };

        // Projects land while the categories request is still pending
        tokio::time::timeout(Duration::from_secs(5), async {
            while hook.snapshot().projects.is_empty() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();

        let state = hook.snapshot();
        assert_eq!(state.projects.len(), 3);
        assert!(!state.loading);
        assert!(state.categories.is_empty());
        assert_eq!(state.error, None);

        gate.notify_one();
        task.await.unwrap();

        let state = hook.snapshot();
        assert_eq!(state.projects.len(), 3);
        assert!(state.categories.is_empty());
        assert!(!state.loading);
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_projects_failure_does_not_block_categories() {
        let source = catalog();
        *source.fail_projects.lock().unwrap() = true;
        let hook = ProjectsHook::new(source);
        hook.initialize().await;

        let state = hook.snapshot();
        assert!(state.projects.is_empty());
        assert_eq!(state.categories.len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("HTTP error! status: 503 Service Unavailable")
        );
    }

    #[tokio::test]
    async fn test_fetch_by_category_loading_transitions() {
        let gate = Arc::new(Notify::new());
        let hook = Arc::new(ProjectsHook::new(FakeSource {
            gate: Some(Arc::clone(&gate)),
            ..catalog()
        }));
        hook.initialize().await;

        let task = {
            let hook = Arc::clone(&hook);
            tokio::spawn(async move { hook.fetch_projects_by_category(20).await })
        };

        // In flight: loading, previous data still visible
        while !hook.snapshot().loading {
            tokio::task::yield_now().await;
        }
        assert_eq!(hook.snapshot().projects.len(), 3);

        gate.notify_one();
        task.await.unwrap();

        let state = hook.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].title, "Graphics Suite");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_data() {
        let hook = ProjectsHook::new(catalog());
        hook.initialize().await;

        *hook.source.fail_projects.lock().unwrap() = true;
        hook.fetch_projects_by_category(10).await;

        let state = hook.snapshot();
        assert!(!state.loading);
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert_eq!(state.projects.len(), 3);

        // Recovery clears the error
        *hook.source.fail_projects.lock().unwrap() = false;
        hook.refetch().await;
        assert_eq!(hook.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_fetch_by_slug_uses_loaded_categories() {
        let hook = ProjectsHook::new(catalog());
        hook.initialize().await;

        hook.fetch_projects_by_category_slug("iot").await;
        let state = hook.snapshot();
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].title, "Smart Home Hub");

        hook.fetch_projects_by_category_slug("IoT Projects").await;
        let state = hook.snapshot();
        assert_eq!(state.error.as_deref(), Some("Unknown category: IoT Projects"));
        assert_eq!(state.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_search_replaces_projects() {
        let hook = ProjectsHook::new(catalog());
        hook.initialize().await;

        hook.search_projects("cyber").await;
        let state = hook.snapshot();
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].id, 1);
    }

    #[tokio::test]
    async fn test_fetch_project_sets_error_when_missing() {
        let hook = ProjectsHook::new(catalog());

        assert_eq!(hook.fetch_project(2).await.map(|p| p.id), Some(2));
        assert_eq!(hook.snapshot().error, None);

        assert!(hook.fetch_project(9999).await.is_none());
        assert!(hook.snapshot().error.is_some());
        assert!(hook.snapshot().projects.is_empty());
    }
}
