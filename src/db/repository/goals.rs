//! Goal store trait.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::error::RepositoryResult;
use crate::models::Goal;

/// Repository trait for goal persistence. Same insert-or-replace `save`
/// semantics as the schedule store; date queries filter on the goal's
/// `date` field.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    async fn list_goals(&self) -> RepositoryResult<Vec<Goal>>;

    async fn get_goal(&self, id: &str) -> RepositoryResult<Option<Goal>>;

    async fn goal_exists(&self, id: &str) -> RepositoryResult<bool>;

    async fn save_goal(&self, goal: Goal) -> RepositoryResult<Goal>;

    /// Delete a goal. Returns `false` if the id was unknown.
    async fn delete_goal(&self, id: &str) -> RepositoryResult<bool>;

    /// All goals whose `date` falls within the given calendar day.
    async fn goals_on_day(&self, date: NaiveDate) -> RepositoryResult<Vec<Goal>>;

    /// All goals whose `date` falls within the inclusive day span.
    async fn goals_in_range(&self, start: NaiveDate, end: NaiveDate)
        -> RepositoryResult<Vec<Goal>>;

    /// Case-insensitive substring search over titles.
    async fn goals_by_title(&self, fragment: &str) -> RepositoryResult<Vec<Goal>>;

    /// All goals created at or after the cutoff.
    async fn goals_created_since(&self, cutoff: NaiveDateTime) -> RepositoryResult<Vec<Goal>>;
}
