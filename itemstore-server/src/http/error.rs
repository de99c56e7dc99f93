//! API error types with IntoResponse
//!
//! Every failure is rendered as `{"detail": "..."}` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Input failed type coercion (422)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// No route matches the request path (404)
    RouteNotFound,

    /// Path matches but the method is not served (405)
    MethodNotAllowed,

    /// Request exceeded the server-side timeout (408)
    RequestTimeout,

    /// Middleware failure (500, logged)
    Internal { message: String },

    /// Pool acquire or statement timed out (504, logged)
    Timeout(DbError),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource = *resource, id = %id, "Lookup missed");
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            Self::RequestTimeout => {
                tracing::warn!("Request timed out");
                (StatusCode::REQUEST_TIMEOUT, "Request timeout".to_string())
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Timeout(e) => {
                tracing::warn!("Database timeout: {}", e);
                (StatusCode::GATEWAY_TIMEOUT, "Database timeout".to_string())
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Timeout(_) => Self::Timeout(e),
            _ => Self::Database(e),
        }
    }
}
