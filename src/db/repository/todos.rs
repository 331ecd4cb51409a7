//! Todo store trait.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::error::RepositoryResult;
use crate::models::Todo;

/// Repository trait for todo persistence. Adds completion-status filters on
/// top of the common CRUD and date queries.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list_todos(&self) -> RepositoryResult<Vec<Todo>>;

    async fn get_todo(&self, id: &str) -> RepositoryResult<Option<Todo>>;

    async fn todo_exists(&self, id: &str) -> RepositoryResult<bool>;

    async fn save_todo(&self, todo: Todo) -> RepositoryResult<Todo>;

    /// Delete a todo. Returns `false` if the id was unknown.
    async fn delete_todo(&self, id: &str) -> RepositoryResult<bool>;

    /// All todos with the given completion status.
    async fn todos_by_completed(&self, completed: bool) -> RepositoryResult<Vec<Todo>>;

    /// Count of todos with the given completion status.
    async fn count_todos_by_completed(&self, completed: bool) -> RepositoryResult<u64>;

    /// All todos whose `date` falls within the given calendar day.
    async fn todos_on_day(&self, date: NaiveDate) -> RepositoryResult<Vec<Todo>>;

    /// All todos whose `date` falls within the inclusive day span.
    async fn todos_in_range(&self, start: NaiveDate, end: NaiveDate)
        -> RepositoryResult<Vec<Todo>>;

    /// Case-insensitive substring search over titles.
    async fn todos_by_title(&self, fragment: &str) -> RepositoryResult<Vec<Todo>>;

    /// All todos created at or after the cutoff.
    async fn todos_created_since(&self, cutoff: NaiveDateTime) -> RepositoryResult<Vec<Todo>>;
}
