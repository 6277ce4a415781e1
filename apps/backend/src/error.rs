//! Error handling for the backend API

use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use cardbox_core::validation::ValidationErrors;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body following the standard envelope
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, errors, debug) = match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".to_string(),
                Some(errors),
                None,
            ),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message, None, None),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None, None),
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
                None,
                debug_detail(e.to_string()),
            ),
            ApiError::Migration(detail) | ApiError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
                None,
                debug_detail(detail),
            ),
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            errors,
            debug,
        });

        (status, body).into_response()
    }
}

/// Internal error detail is only exposed when APP_DEBUG is set.
fn debug_detail(detail: String) -> Option<String> {
    static DEBUG: OnceLock<bool> = OnceLock::new();
    let enabled = *DEBUG.get_or_init(|| {
        std::env::var("APP_DEBUG")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false)
    });
    enabled.then_some(detail)
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
