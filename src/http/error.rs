//! HTTP error handling and response types.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::repository::RepositoryError;
use crate::services::validation::{ConflictError, ValidationError};
use crate::services::ServiceError;

/// API error response body.
///
/// Consistent error shape across all endpoints: the HTTP status, a short
/// error label, a human-readable message, and for validation failures a
/// machine-readable field-to-message map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Timestamp when the error occurred
    pub timestamp: NaiveDateTime,
    /// HTTP status code
    pub status: u16,
    /// Error type/category
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details (e.g. validation errors keyed by field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Malformed request input (e.g. unparseable date)
    BadRequest(String),
    /// A candidate failed field validation
    Validation(ValidationError),
    /// A schedule candidate overlaps an existing entry
    Conflict(ConflictError),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, label, message, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg, None),
            AppError::Validation(err) => {
                let details =
                    HashMap::from([(err.field().to_string(), err.to_string())]);
                (
                    StatusCode::BAD_REQUEST,
                    "Validation Error",
                    "Invalid input data".to_string(),
                    Some(details),
                )
            }
            AppError::Conflict(err) => (
                StatusCode::BAD_REQUEST,
                "Schedule Conflict",
                err.to_string(),
                None,
            ),
            AppError::Repository(e) => match e {
                RepositoryError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found", msg, None),
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    other.to_string(),
                    None,
                ),
            },
        };

        error!("{}: {}", label, message);

        let body = ApiError {
            timestamp: Local::now().naive_local(),
            status: status.as_u16(),
            error: label.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => AppError::Validation(e),
            ServiceError::Conflict(e) => AppError::Conflict(e),
            ServiceError::NotFound { kind, id } => {
                AppError::NotFound(format!("{} not found with ID: {}", kind, id))
            }
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
