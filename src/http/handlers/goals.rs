//! Handlers for the goal endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::{parse_date, HandlerResult};
use crate::http::dto::{DateRangeQuery, GoalRequest, RecentQuery, TitleQuery};
use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::models::Goal;

/// POST /api/goals
///
/// Create a new goal.
pub async fn create_goal(
    State(state): State<AppState>,
    Json(request): Json<GoalRequest>,
) -> Result<(StatusCode, Json<Goal>), AppError> {
    info!("POST /api/goals - Creating new goal");
    let created = state.goals.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/goals
///
/// List all goals.
pub async fn list_goals(State(state): State<AppState>) -> HandlerResult<Vec<Goal>> {
    info!("GET /api/goals - Fetching all goals");
    Ok(Json(state.goals.list_all().await?))
}

/// GET /api/goals/{id}
///
/// Get a goal by ID, or 404 if not found.
pub async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Goal> {
    info!("GET /api/goals/{} - Fetching goal by ID", id);
    state
        .goals
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Goal not found with ID: {}", id)))
}

/// PUT /api/goals/{id}
///
/// Replace a goal's fields.
pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<GoalRequest>,
) -> HandlerResult<Goal> {
    info!("PUT /api/goals/{} - Updating goal", id);
    Ok(Json(state.goals.update(&id, request.into()).await?))
}

/// DELETE /api/goals/{id}
///
/// Delete a goal: 204 on success, 404 if unknown.
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/goals/{} - Deleting goal", id);
    state.goals.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/goals/date/{date}
///
/// List goals on the given date (`yyyy-MM-dd`).
pub async fn goals_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> HandlerResult<Vec<Goal>> {
    info!("GET /api/goals/date/{} - Fetching goals by date", date);
    let date = parse_date(&date)?;
    Ok(Json(state.goals.on_date(date).await?))
}

/// GET /api/goals/daterange?startDate&endDate
///
/// List goals within the inclusive date range.
pub async fn goals_by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> HandlerResult<Vec<Goal>> {
    info!(
        "GET /api/goals/daterange - Fetching goals by date range: {} to {}",
        query.start_date, query.end_date
    );
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;
    Ok(Json(state.goals.in_date_range(start, end).await?))
}

/// GET /api/goals/search?title
///
/// Search goals by title fragment.
pub async fn search_goals(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> HandlerResult<Vec<Goal>> {
    info!("GET /api/goals/search - Searching goals by title: {}", query.title);
    Ok(Json(state.goals.search_by_title(&query.title).await?))
}

/// GET /api/goals/recent?days
///
/// List goals created in the last N days (default 7).
pub async fn recent_goals(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> HandlerResult<Vec<Goal>> {
    let days = query.days.unwrap_or(7);
    info!("GET /api/goals/recent - Fetching goals created in last {} days", days);
    Ok(Json(state.goals.created_in_last_days(days).await?))
}
