//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::services::{GoalService, ScheduleService, TodoService};

/// Shared application state passed to all handlers.
///
/// The store handle is injected once here and threaded into each service;
/// handlers never reach for storage directly.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance, kept for health checks
    pub repository: Arc<dyn FullRepository>,
    pub goals: GoalService,
    pub todos: TodoService,
    pub schedules: ScheduleService,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            goals: GoalService::new(repository.clone()),
            todos: TodoService::new(repository.clone()),
            schedules: ScheduleService::new(repository.clone()),
            repository,
        }
    }
}
