//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router
    let api = Router::new()
        // Goal CRUD and queries
        .route("/goals", post(handlers::goals::create_goal))
        .route("/goals", get(handlers::goals::list_goals))
        .route("/goals/{id}", get(handlers::goals::get_goal))
        .route("/goals/{id}", put(handlers::goals::update_goal))
        .route("/goals/{id}", delete(handlers::goals::delete_goal))
        .route("/goals/date/{date}", get(handlers::goals::goals_by_date))
        .route("/goals/daterange", get(handlers::goals::goals_by_date_range))
        .route("/goals/search", get(handlers::goals::search_goals))
        .route("/goals/recent", get(handlers::goals::recent_goals))
        // Todo CRUD, completion toggles, and queries
        .route("/todos", post(handlers::todos::create_todo))
        .route("/todos", get(handlers::todos::list_todos))
        .route("/todos/{id}", get(handlers::todos::get_todo))
        .route("/todos/{id}", put(handlers::todos::update_todo))
        .route("/todos/{id}", delete(handlers::todos::delete_todo))
        .route("/todos/{id}/complete", patch(handlers::todos::complete_todo))
        .route("/todos/{id}/incomplete", patch(handlers::todos::incomplete_todo))
        .route("/todos/status/{isCompleted}", get(handlers::todos::todos_by_status))
        .route("/todos/count", get(handlers::todos::count_todos))
        .route("/todos/date/{date}", get(handlers::todos::todos_by_date))
        .route("/todos/daterange", get(handlers::todos::todos_by_date_range))
        .route("/todos/search", get(handlers::todos::search_todos))
        .route("/todos/recent", get(handlers::todos::recent_todos))
        // Schedule CRUD and queries (writes are conflict-checked)
        .route("/schedules", post(handlers::schedules::create_schedule))
        .route("/schedules", get(handlers::schedules::list_schedules))
        .route("/schedules/{id}", get(handlers::schedules::get_schedule))
        .route("/schedules/{id}", put(handlers::schedules::update_schedule))
        .route("/schedules/{id}", delete(handlers::schedules::delete_schedule))
        .route("/schedules/date/{date}", get(handlers::schedules::schedules_by_date))
        .route("/schedules/daterange", get(handlers::schedules::schedules_by_date_range))
        .route("/schedules/search", get(handlers::schedules::search_schedules))
        .route("/schedules/recent", get(handlers::schedules::recent_schedules));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::factory::RepositoryFactory;

    #[test]
    fn test_router_creation() {
        let repo = RepositoryFactory::create_local();
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
