//! Todo business logic: validated CRUD, completion toggles, and the
//! filtered read queries.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use tracing::info;

use super::validation::{self, TodoDraft, ValidationError};
use super::{ServiceError, ServiceResult};
use crate::db::repository::FullRepository;
use crate::models::Todo;

/// Service for todo operations.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn FullRepository>,
}

impl TodoService {
    /// Create a new todo service over the given store handle.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self { repository }
    }

    /// Create a new todo.
    pub async fn create(&self, draft: TodoDraft) -> ServiceResult<Todo> {
        info!(
            "Creating new todo: {}",
            draft.title.as_deref().unwrap_or("<untitled>")
        );
        let todo = todo_from_draft(draft)?;
        let saved = self.repository.save_todo(todo).await?;
        info!(
            "Todo created successfully with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    /// Update an existing todo; title, description, completion flag and date
    /// are replaced together.
    pub async fn update(&self, id: &str, draft: TodoDraft) -> ServiceResult<Todo> {
        info!("Updating todo with ID: {}", id);
        let existing = self
            .repository
            .get_todo(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Todo", id))?;

        let mut todo = todo_from_draft(draft)?;
        todo.id = existing.id.clone();
        todo.created_at = existing.created_at;

        let saved = self.repository.save_todo(todo).await?;
        info!(
            "Todo updated successfully with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    /// Get all todos.
    pub async fn list_all(&self) -> ServiceResult<Vec<Todo>> {
        info!("Fetching all todos");
        Ok(self.repository.list_todos().await?)
    }

    /// Get a todo by ID.
    pub async fn get(&self, id: &str) -> ServiceResult<Option<Todo>> {
        info!("Fetching todo by ID: {}", id);
        Ok(self.repository.get_todo(id).await?)
    }

    /// Delete a todo.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        info!("Deleting todo with ID: {}", id);
        if !self.repository.todo_exists(id).await? {
            return Err(ServiceError::not_found("Todo", id));
        }
        self.repository.delete_todo(id).await?;
        info!("Todo deleted successfully with ID: {}", id);
        Ok(())
    }

    /// Mark a todo as completed.
    pub async fn mark_completed(&self, id: &str) -> ServiceResult<Todo> {
        info!("Marking todo as completed with ID: {}", id);
        self.set_completion(id, true).await
    }

    /// Mark a todo as incomplete.
    pub async fn mark_incomplete(&self, id: &str) -> ServiceResult<Todo> {
        info!("Marking todo as incomplete with ID: {}", id);
        self.set_completion(id, false).await
    }

    async fn set_completion(&self, id: &str, completed: bool) -> ServiceResult<Todo> {
        let mut todo = self
            .repository
            .get_todo(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Todo", id))?;
        todo.completed = completed;
        Ok(self.repository.save_todo(todo).await?)
    }

    /// Get todos with the given completion status.
    pub async fn by_completion(&self, completed: bool) -> ServiceResult<Vec<Todo>> {
        info!("Fetching todos by completion status: {}", completed);
        Ok(self.repository.todos_by_completed(completed).await?)
    }

    /// Count todos with the given completion status.
    pub async fn count_by_completion(&self, completed: bool) -> ServiceResult<u64> {
        info!("Counting todos by completion status: {}", completed);
        Ok(self.repository.count_todos_by_completed(completed).await?)
    }

    /// Get todos due on the specified date.
    pub async fn on_date(&self, date: NaiveDate) -> ServiceResult<Vec<Todo>> {
        info!("Fetching todos for date: {}", date);
        Ok(self.repository.todos_on_day(date).await?)
    }

    /// Get todos within the inclusive date range.
    pub async fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> ServiceResult<Vec<Todo>> {
        info!("Fetching todos by date range: {} to {}", start, end);
        Ok(self.repository.todos_in_range(start, end).await?)
    }

    /// Search todos by title fragment (case-insensitive).
    pub async fn search_by_title(&self, title: &str) -> ServiceResult<Vec<Todo>> {
        info!("Searching todos by title: {}", title);
        Ok(self.repository.todos_by_title(title).await?)
    }

    /// Get todos created in the last N days.
    pub async fn created_in_last_days(&self, days: i64) -> ServiceResult<Vec<Todo>> {
        info!("Fetching todos created in last {} days", days);
        let cutoff = Local::now().naive_local() - Duration::days(days);
        Ok(self.repository.todos_created_since(cutoff).await?)
    }
}

fn todo_from_draft(draft: TodoDraft) -> ServiceResult<Todo> {
    validation::validate_todo_draft(&draft)?;
    let TodoDraft {
        title,
        description,
        completed,
        date,
    } = draft;
    match (title, date) {
        (Some(title), Some(date)) => Ok(Todo {
            id: None,
            title,
            description,
            completed,
            date,
            created_at: None,
            updated_at: None,
        }),
        // validate_todo_draft guarantees presence of title and date
        _ => Err(ValidationError::MissingDate.into()),
    }
}
