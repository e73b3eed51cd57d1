//! HTTP error mapping
//!
//! The only place where domain and storage errors become responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::NotFoundError;
use crate::repository::RepositoryError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested record does not exist (404)
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Well-formed body with invalid field values (422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Body could not be read as the expected JSON (status from the rejection)
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Path parameter could not be parsed (status from the rejection)
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathRejection),

    /// Storage backend fault (500)
    #[error("Storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(e) => ApiError::NotFound(e),
            RepositoryError::Storage(e) => ApiError::Storage(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::NotFound(e) => (StatusCode::NOT_FOUND, "NOT_FOUND", e.to_string()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg.clone())
            }
            ApiError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
            ApiError::InvalidPath(rejection) => {
                (rejection.status(), "INVALID_PATH", rejection.body_text())
            }
            ApiError::Storage(e) => {
                error!("Storage error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", e.to_string())
            }
        };

        if status.is_client_error() {
            warn!(status = status.as_u16(), "{}", message);
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
