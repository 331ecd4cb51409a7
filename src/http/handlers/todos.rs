//! Handlers for the todo endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use super::{parse_date, HandlerResult};
use crate::http::dto::{CompletionQuery, DateRangeQuery, RecentQuery, TitleQuery, TodoRequest};
use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::models::Todo;

/// POST /api/todos
///
/// Create a new todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<TodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    info!("POST /api/todos - Creating new todo");
    let created = state.todos.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/todos
///
/// List all todos.
pub async fn list_todos(State(state): State<AppState>) -> HandlerResult<Vec<Todo>> {
    info!("GET /api/todos - Fetching all todos");
    Ok(Json(state.todos.list_all().await?))
}

/// GET /api/todos/{id}
///
/// Get a todo by ID, or 404 if not found.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Todo> {
    info!("GET /api/todos/{} - Fetching todo by ID", id);
    state
        .todos
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Todo not found with ID: {}", id)))
}

/// PUT /api/todos/{id}
///
/// Replace a todo's fields.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TodoRequest>,
) -> HandlerResult<Todo> {
    info!("PUT /api/todos/{} - Updating todo", id);
    Ok(Json(state.todos.update(&id, request.into()).await?))
}

/// DELETE /api/todos/{id}
///
/// Delete a todo: 204 on success, 404 if unknown.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /api/todos/{} - Deleting todo", id);
    state.todos.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/todos/{id}/complete
///
/// Mark a todo as completed.
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Todo> {
    info!("PATCH /api/todos/{}/complete - Marking todo as completed", id);
    Ok(Json(state.todos.mark_completed(&id).await?))
}

/// PATCH /api/todos/{id}/incomplete
///
/// Mark a todo as incomplete.
pub async fn incomplete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Todo> {
    info!("PATCH /api/todos/{}/incomplete - Marking todo as incomplete", id);
    Ok(Json(state.todos.mark_incomplete(&id).await?))
}

/// GET /api/todos/status/{isCompleted}
///
/// List todos with the given completion status.
pub async fn todos_by_status(
    State(state): State<AppState>,
    Path(is_completed): Path<bool>,
) -> HandlerResult<Vec<Todo>> {
    info!(
        "GET /api/todos/status/{} - Fetching todos by completion status",
        is_completed
    );
    Ok(Json(state.todos.by_completion(is_completed).await?))
}

/// GET /api/todos/count?isCompleted
///
/// Count todos with the given completion status.
pub async fn count_todos(
    State(state): State<AppState>,
    Query(query): Query<CompletionQuery>,
) -> HandlerResult<u64> {
    info!(
        "GET /api/todos/count - Counting todos by completion status: {}",
        query.is_completed
    );
    Ok(Json(state.todos.count_by_completion(query.is_completed).await?))
}

/// GET /api/todos/date/{date}
///
/// List todos due on the given date (`yyyy-MM-dd`).
pub async fn todos_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> HandlerResult<Vec<Todo>> {
    info!("GET /api/todos/date/{} - Fetching todos by date", date);
    let date = parse_date(&date)?;
    Ok(Json(state.todos.on_date(date).await?))
}

/// GET /api/todos/daterange?startDate&endDate
///
/// List todos within the inclusive date range.
pub async fn todos_by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> HandlerResult<Vec<Todo>> {
    info!(
        "GET /api/todos/daterange - Fetching todos by date range: {} to {}",
        query.start_date, query.end_date
    );
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;
    Ok(Json(state.todos.in_date_range(start, end).await?))
}

/// GET /api/todos/search?title
///
/// Search todos by title fragment.
pub async fn search_todos(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> HandlerResult<Vec<Todo>> {
    info!("GET /api/todos/search - Searching todos by title: {}", query.title);
    Ok(Json(state.todos.search_by_title(&query.title).await?))
}

/// GET /api/todos/recent?days
///
/// List todos created in the last N days (default 7).
pub async fn recent_todos(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> HandlerResult<Vec<Todo>> {
    let days = query.days.unwrap_or(7);
    info!("GET /api/todos/recent - Fetching todos created in last {} days", days);
    Ok(Json(state.todos.created_in_last_days(days).await?))
}
