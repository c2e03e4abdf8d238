/// Typed HTTP client for the catalog API
///
/// Each call issues one GET, requires a 2xx status, decodes the envelope and
/// hands back only its `data` field.

use crate::api::{Envelope, HealthStatus};
use crate::catalog::{Category, Project};
use crate::config::ClientConfig;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why an API call failed
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered `success: false`
    #[error("{0}")]
    Api(String),

    #[error("Response envelope carried no data")]
    MissingData,
}

/// Catalog API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` includes the API prefix, e.g. "http://localhost:5000/api"
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url)
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn request<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments);
        tracing::debug!("🌐 GET {}", url);

        let result = self.fetch_envelope::<T>(url.clone()).await;
        if let Err(e) = &result {
            tracing::error!("API request failed: {} ({})", e, url);
        }
        result
    }

    async fn fetch_envelope<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;

        if !envelope.success {
            return Err(ClientError::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "Request was not successful".to_string()),
            ));
        }

        envelope.data.ok_or(ClientError::MissingData)
    }

    /// Get all projects
    pub async fn get_all_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.request(&["projects"]).await
    }

    /// Get projects by category
    pub async fn get_projects_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Project>, ClientError> {
        self.request(&["projects", "category", &category_id.to_string()])
            .await
    }

    /// Get single project
    pub async fn get_project(&self, id: i64) -> Result<Project, ClientError> {
        self.request(&["projects", &id.to_string()]).await
    }

    /// Search projects; the query travels as one encoded path segment
    pub async fn search_projects(&self, query: &str) -> Result<Vec<Project>, ClientError> {
        self.request(&["projects", "search", query]).await
    }

    /// Get all categories
    pub async fn get_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.request(&["projects", "categories", "all"]).await
    }

    /// Health check
    pub async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        self.request(&["health"]).await
    }
}
