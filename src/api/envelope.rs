/// Uniform JSON response envelope
///
/// Every endpoint answers `{ success, data?, count?, message? }`. Success
/// bodies carry `data` (plus `count` for lists); failure bodies carry only
/// `success: false` and a human-readable `message`.

use crate::catalog::RetrievalError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed message for single-item lookups that match nothing
pub const PROJECT_NOT_FOUND: &str = "Project not found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Success envelope around a single object
    pub fn item(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    /// Failure envelope; carries no data
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Success envelope around a sequence, with its length as `count`
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data: Some(data),
            message: None,
        }
    }
}

/// Failures a handler can report
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Project not found")]
    NotFound,

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Retrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("❌ Request failed: {}", self);
        }
        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_shape() {
        let body = serde_json::to_value(Envelope::list(vec![1, 2, 3])).unwrap();
        assert_eq!(body, json!({ "success": true, "data": [1, 2, 3], "count": 3 }));
    }

    #[test]
    fn test_item_and_failure_shapes() {
        let body = serde_json::to_value(Envelope::item("x")).unwrap();
        assert_eq!(body, json!({ "success": true, "data": "x" }));

        let body = serde_json::to_value(Envelope::<()>::failure("boom")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "boom" }));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.to_string(), "Project not found");

        let err = ApiError::from(RetrievalError::new("Error fetching projects: closed"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error fetching projects: closed");
    }
}
