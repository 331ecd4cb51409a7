//! Handlers for the schedule endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::{parse_date, HandlerResult};
use crate::http::dto::{DateRangeQuery, RecentQuery, ScheduleRequest, TitleQuery};
use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::models::ScheduleEntry;

/// POST /api/schedules
///
/// Create a new schedule entry. Rejected with 400 when field validation
/// fails or the interval conflicts with an existing same-day entry.
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleEntry>), AppError> {
    info!("POST /api/schedules - Creating new schedule");
    let created = state.schedules.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/schedules
///
/// List all schedule entries.
pub async fn list_schedules(State(state): State<AppState>) -> HandlerResult<Vec<ScheduleEntry>> {
    info!("GET /api/schedules - Fetching all schedules");
    Ok(Json(state.schedules.list_all().await?))
}

/// GET /api/schedules/{id}
///
/// Get a schedule entry by ID, or 404 if not found.
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<ScheduleEntry> {
    info!("GET /api/schedules/{} - Fetching schedule by ID", id);
    state
        .schedules
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Schedule not found with ID: {}", id)))
}

/// PUT /api/schedules/{id}
///
/// Replace a schedule entry's fields, re-running the conflict check
/// against all *other* same-day entries.
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ScheduleRequest>,
) -> HandlerResult<ScheduleEntry> {
    info!("PUT /api/schedules/{} - Updating schedule", id);
    Ok(Json(state.schedules.update(&id, request.into()).await?))
}

/// DELETE /api/schedules/{id}
///
/// Delete a schedule entry: 204 on success, 404 if unknown.
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/schedules/{} - Deleting schedule", id);
    state.schedules.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/schedules/date/{date}
///
/// List schedule entries starting on the given date (`yyyy-MM-dd`).
pub async fn schedules_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> HandlerResult<Vec<ScheduleEntry>> {
    info!("GET /api/schedules/date/{} - Fetching schedules by date", date);
    let date = parse_date(&date)?;
    Ok(Json(state.schedules.on_date(date).await?))
}

/// GET /api/schedules/daterange?startDate&endDate
///
/// List schedule entries within the inclusive date range.
pub async fn schedules_by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> HandlerResult<Vec<ScheduleEntry>> {
    info!(
        "GET /api/schedules/daterange - Fetching schedules by date range: {} to {}",
        query.start_date, query.end_date
    );
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;
    Ok(Json(state.schedules.in_date_range(start, end).await?))
}

/// GET /api/schedules/search?title
///
/// Search schedule entries by title fragment.
pub async fn search_schedules(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> HandlerResult<Vec<ScheduleEntry>> {
    info!(
        "GET /api/schedules/search - Searching schedules by title: {}",
        query.title
    );
    Ok(Json(state.schedules.search_by_title(&query.title).await?))
}

/// GET /api/schedules/recent?days
///
/// List schedule entries created in the last N days (default 7).
pub async fn recent_schedules(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> HandlerResult<Vec<ScheduleEntry>> {
    let days = query.days.unwrap_or(7);
    info!(
        "GET /api/schedules/recent - Fetching schedules created in last {} days",
        days
    );
    Ok(Json(state.schedules.created_in_last_days(days).await?))
}
