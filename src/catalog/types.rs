/// Catalog type definitions
///
/// Rows are denormalized at query time: a `Project` already carries its
/// category name/description and the flattened technology list, so the
/// API layer can serialize repository output as-is.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of media attached to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Publication state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Inactive,
    Archived,
}

/// A portfolio project enriched with its category and technologies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Free-text features, comma-joined (e.g. "Object detection,Real-time processing")
    pub features: String,
    pub media_url: String,
    pub media_type: MediaType,
    /// Aspect ratio hint for the front-end, e.g. "16/9"
    pub aspect_ratio: String,
    /// Nullable: a project whose category was deleted still lists
    pub category_id: Option<i64>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub sort_order: i64,
    pub external_url: Option<String>,
    pub github_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Joined from `categories.name`
    pub category_name: Option<String>,
    /// Joined from `categories.description`
    pub category_description: Option<String>,
    /// Technology names linked through `project_technologies`, comma-joined
    /// and sorted by name. Empty when the project has none.
    pub technologies: String,
}

/// A project category with its live project count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Stable identifier for client-side selection (e.g. "iot-projects")
    pub slug: String,
    pub icon: String,
    pub color: String,
    /// Computed per query from the projects table, never stored
    pub project_count: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A technology tag. Only reachable through the join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Technology {
    pub id: i64,
    pub name: String,
}

impl Project {
    /// Technology names as a list, in the order the store aggregated them
    pub fn technology_names(&self) -> Vec<&str> {
        split_list(&self.technologies)
    }

    /// Feature strings as a list
    pub fn feature_list(&self) -> Vec<&str> {
        split_list(&self.features)
    }
}

/// Split a comma-joined column into trimmed, non-empty items
pub(crate) fn split_list(joined: &str) -> Vec<&str> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_skips_blanks() {
        assert_eq!(split_list("Rust, Axum,,SQLite "), vec!["Rust", "Axum", "SQLite"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&MediaType::Video).unwrap(), "\"video\"");
        assert_eq!(
            serde_json::from_str::<ProjectStatus>("\"archived\"").unwrap(),
            ProjectStatus::Archived
        );
    }
}
