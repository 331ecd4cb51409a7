//! Schedule business logic: validated, conflict-checked writes plus the
//! filtered read queries.
//!
//! Writes follow a fixed pipeline: field validation, then a same-day read
//! from the store, then conflict detection against that set, and only on
//! success the persist call. The read-check-write sequence runs under a
//! per-calendar-day lock so two concurrent overlapping writes cannot both
//! pass the check; reads take no lock.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use tracing::info;

use super::validation::{self, ScheduleDraft, ValidationError};
use super::{ServiceError, ServiceResult};
use crate::db::repository::FullRepository;
use crate::models::ScheduleEntry;

/// Registry of per-calendar-day write locks.
///
/// The outer map guard is held only long enough to clone the day's lock
/// handle; the inner async mutex is held across the store round-trips.
#[derive(Default)]
struct DayLocks {
    locks: parking_lot::Mutex<HashMap<NaiveDate, Arc<tokio::sync::Mutex<()>>>>,
}

impl DayLocks {
    fn for_day(&self, day: NaiveDate) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        locks.entry(day).or_default().clone()
    }
}

/// Service for schedule entry operations.
#[derive(Clone)]
pub struct ScheduleService {
    repository: Arc<dyn FullRepository>,
    day_locks: Arc<DayLocks>,
}

impl ScheduleService {
    /// Create a new schedule service over the given store handle.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            day_locks: Arc::new(DayLocks::default()),
        }
    }

    /// Create a new schedule entry.
    ///
    /// Validates fields, then checks the candidate interval against every
    /// entry already scheduled on its start date; the store is only touched
    /// once both checks pass.
    pub async fn create(&self, draft: ScheduleDraft) -> ServiceResult<ScheduleEntry> {
        info!(
            "Creating new schedule: {}",
            draft.title.as_deref().unwrap_or("<untitled>")
        );
        let candidate = entry_from_draft(draft)?;

        let day = candidate.start_time.date();
        let lock = self.day_locks.for_day(day);
        let _guard = lock.lock().await;

        let same_day = self.repository.schedules_on_day(day).await?;
        validation::check_conflicts(candidate.start_time, candidate.end_time, &same_day, None)?;

        let saved = self.repository.save_schedule(candidate).await?;
        info!(
            "Schedule created successfully with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    /// Update an existing schedule entry.
    ///
    /// Title, description and interval are replaced together, followed by a
    /// fresh conflict check that skips the entry's own prior version.
    pub async fn update(&self, id: &str, draft: ScheduleDraft) -> ServiceResult<ScheduleEntry> {
        info!("Updating schedule with ID: {}", id);
        let existing = self
            .repository
            .get_schedule(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", id))?;

        let mut candidate = entry_from_draft(draft)?;
        candidate.id = existing.id.clone();
        candidate.created_at = existing.created_at;

        let day = candidate.start_time.date();
        let lock = self.day_locks.for_day(day);
        let _guard = lock.lock().await;

        let same_day = self.repository.schedules_on_day(day).await?;
        validation::check_conflicts(
            candidate.start_time,
            candidate.end_time,
            &same_day,
            existing.id.as_deref(),
        )?;

        let saved = self.repository.save_schedule(candidate).await?;
        info!(
            "Schedule updated successfully with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        );
        Ok(saved)
    }

    /// Get all schedule entries.
    pub async fn list_all(&self) -> ServiceResult<Vec<ScheduleEntry>> {
        info!("Fetching all schedules");
        Ok(self.repository.list_schedules().await?)
    }

    /// Get a schedule entry by ID.
    pub async fn get(&self, id: &str) -> ServiceResult<Option<ScheduleEntry>> {
        info!("Fetching schedule by ID: {}", id);
        Ok(self.repository.get_schedule(id).await?)
    }

    /// Delete a schedule entry. Deletes have no conflict implications.
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        info!("Deleting schedule with ID: {}", id);
        if !self.repository.schedule_exists(id).await? {
            return Err(ServiceError::not_found("Schedule", id));
        }
        self.repository.delete_schedule(id).await?;
        info!("Schedule deleted successfully with ID: {}", id);
        Ok(())
    }

    /// Get schedule entries starting on the specified date.
    pub async fn on_date(&self, date: NaiveDate) -> ServiceResult<Vec<ScheduleEntry>> {
        info!("Fetching schedules for date: {}", date);
        Ok(self.repository.schedules_on_day(date).await?)
    }

    /// Get schedule entries within the inclusive date range.
    pub async fn in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<Vec<ScheduleEntry>> {
        info!("Fetching schedules by date range: {} to {}", start, end);
        Ok(self.repository.schedules_in_range(start, end).await?)
    }

    /// Search schedule entries by title fragment (case-insensitive).
    pub async fn search_by_title(&self, title: &str) -> ServiceResult<Vec<ScheduleEntry>> {
        info!("Searching schedules by title: {}", title);
        Ok(self.repository.schedules_by_title(title).await?)
    }

    /// Get schedule entries created in the last N days.
    pub async fn created_in_last_days(&self, days: i64) -> ServiceResult<Vec<ScheduleEntry>> {
        info!("Fetching schedules created in last {} days", days);
        let cutoff = Local::now().naive_local() - Duration::days(days);
        Ok(self.repository.schedules_created_since(cutoff).await?)
    }
}

/// Validate a draft and shape it into a persistable entry; id and audit
/// stamps stay empty for the store to assign.
fn entry_from_draft(draft: ScheduleDraft) -> ServiceResult<ScheduleEntry> {
    validation::validate_schedule_draft(&draft)?;
    let ScheduleDraft {
        title,
        description,
        start_time,
        end_time,
    } = draft;
    match (title, start_time, end_time) {
        (Some(title), Some(start_time), Some(end_time)) => Ok(ScheduleEntry {
            id: None,
            title,
            description,
            start_time,
            end_time,
            created_at: None,
            updated_at: None,
        }),
        // validate_schedule_draft guarantees presence of all three fields
        _ => Err(ValidationError::MissingStartTime.into()),
    }
}
