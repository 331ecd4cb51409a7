//! Goal business logic: validated CRUD and the filtered read queries.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use tracing::info;

use super::validation::{self, GoalDraft, ValidationError};
use super::{ServiceError, ServiceResult};
use crate::db::repository::FullRepository;
use crate::models::Goal;

/// Service for goal operations.
#[derive(Clone)]
pub struct GoalService {
    repository: Arc<dyn FullRepository>,
}

impl GoalService {
    /// Create a new goal service over the given store handle.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self { repository }
    }

    /// Create a new goal.
    pub async fn create(&self, draft: GoalDraft) -> ServiceResult<Goal> {
        info!(
            "Creating new goal: {}",
            draft.title.as_deref().unwrap_or("<untitled>")
        );
        let goal = goal_from_draft(draft)?;
        let saved = self.repository.save_goal(goal).await?;
        info!(
            "Goal created successfully with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    /// Update an existing goal; title, description and date are replaced
    /// together.
    pub async fn update(&self, id: &str, draft: GoalDraft) -> ServiceResult<Goal> {
        info!("Updating goal with ID: {}", id);
        let existing = self
            .repository
            .get_goal(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Goal", id))?;

        let mut goal = goal_from_draft(draft)?;
        goal.id = existing.id.clone();
        goal.created_at = existing.created_at;

        let saved = self.repository.save_goal(goal).await?;
        info!(
            "Goal updated successfully with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    /// Get all goals.
    pub async fn list_all(&self) -> ServiceResult<Vec<Goal>> {
        info!("Fetching all goals");
        Ok(self.repository.list_goals().await?)
    }

    /// Get a goal by ID.
    pub async fn get(&self, id: &str) -> ServiceResult<Option<Goal>> {
        info!("Fetching goal by ID: {}", id);
        Ok(self.repository.get_goal(id).await?)
    }

    /// Delete a goal.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        info!("Deleting goal with ID: {}", id);
        if !self.repository.goal_exists(id).await? {
            return Err(ServiceError::not_found("Goal", id));
        }
        self.repository.delete_goal(id).await?;
        info!("Goal deleted successfully with ID: {}", id);
        Ok(())
    }

    /// Get goals on the specified date.
    pub async fn on_date(&self, date: NaiveDate) -> ServiceResult<Vec<Goal>> {
        info!("Fetching goals for date: {}", date);
        Ok(self.repository.goals_on_day(date).await?)
    }

    /// Get goals within the inclusive date range.
    pub async fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> ServiceResult<Vec<Goal>> {
        info!("Fetching goals by date range: {} to {}", start, end);
        Ok(self.repository.goals_in_range(start, end).await?)
    }

    /// Search goals by title fragment (case-insensitive).
    pub async fn search_by_title(&self, title: &str) -> ServiceResult<Vec<Goal>> {
        info!("Searching goals by title: {}", title);
        Ok(self.repository.goals_by_title(title).await?)
    }

    /// Get goals created in the last N days.
    pub async fn created_in_last_days(&self, days: i64) -> ServiceResult<Vec<Goal>> {
        info!("Fetching goals created in last {} days", days);
        let cutoff = Local::now().naive_local() - Duration::days(days);
        Ok(self.repository.goals_created_since(cutoff).await?)
    }
}

fn goal_from_draft(draft: GoalDraft) -> ServiceResult<Goal> {
    validation::validate_goal_draft(&draft)?;
    let GoalDraft {
        title,
        description,
        date,
    } = draft;
    match (title, date) {
        (Some(title), Some(date)) => Ok(Goal {
            id: None,
            title,
            description,
            date,
            created_at: None,
            updated_at: None,
        }),
        // validate_goal_draft guarantees presence of title and date
        _ => Err(ValidationError::MissingDate.into()),
    }
}
