/// View-model transform for project cards
///
/// Presentational code works with lists rather than the comma-joined
/// columns the API returns. Styling and layout stay out of this crate.

use crate::catalog::{MediaType, Project};
use serde::Serialize;

/// A project shaped for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Category display name; empty when the project has no category
    pub category: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub aspect_ratio: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub featured: bool,
    pub external_url: Option<String>,
    pub github_url: Option<String>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category_name.clone().unwrap_or_default(),
            media_url: project.media_url.clone(),
            media_type: project.media_type,
            aspect_ratio: project.aspect_ratio.clone(),
            technologies: project.technology_names().into_iter().map(String::from).collect(),
            features: project.feature_list().into_iter().map(String::from).collect(),
            featured: project.featured,
            external_url: project.external_url.clone(),
            github_url: project.github_url.clone(),
        }
    }
}

/// Cards for a whole project list, keeping order
pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects.iter().map(ProjectCard::from).collect()
}
