//! Error types for the dashboard API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use outreach_core::StoreError;

/// Errors that can occur while serving dashboard requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Store error from a repository.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Missing or empty `x-user-id` header.
    #[error("missing x-user-id header")]
    Unauthorized,

    /// Malformed query or body input.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(err) => match err {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::AlreadyExists { .. } => StatusCode::CONFLICT,
                StoreError::Validation(_) | StoreError::InvalidTransition { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                StoreError::Backend(_) => {
                    tracing::error!("Store backend error: {}", err);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::warn!(status = %status, "Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, ApiError>;
