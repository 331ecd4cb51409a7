//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. Handlers are grouped per resource.

pub mod goals;
pub mod schedules;
pub mod todos;

use axum::{extract::State, Json};
use chrono::NaiveDate;

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse a `yyyy-MM-dd` path or query value.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse::<NaiveDate>()
        .map_err(|_| AppError::BadRequest(format!("Invalid date format: {}", raw)))
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}
