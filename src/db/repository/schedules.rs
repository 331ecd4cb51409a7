//! Schedule store trait: CRUD plus the day-window queries the conflict
//! check is built on.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::error::RepositoryResult;
use crate::models::ScheduleEntry;

/// Repository trait for schedule entry persistence.
///
/// `save_schedule` is an insert-or-replace: entries without an id are
/// assigned one (plus a `created_at` stamp), and `updated_at` is refreshed
/// on every write. The store owns all audit timestamps.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Check if the store connection is healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List every schedule entry.
    async fn list_schedules(&self) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// Retrieve a single entry, or `None` if the id is unknown.
    async fn get_schedule(&self, id: &str) -> RepositoryResult<Option<ScheduleEntry>>;

    /// Check whether an entry with the given id exists.
    async fn schedule_exists(&self, id: &str) -> RepositoryResult<bool>;

    /// Insert or replace an entry, returning the persisted form (with
    /// store-assigned id and audit stamps).
    async fn save_schedule(&self, entry: ScheduleEntry) -> RepositoryResult<ScheduleEntry>;

    /// Delete an entry. Returns `false` if the id was unknown.
    async fn delete_schedule(&self, id: &str) -> RepositoryResult<bool>;

    /// All entries whose `start_time` falls within the given calendar day
    /// (local midnight through 23:59:59.999999).
    async fn schedules_on_day(&self, date: NaiveDate) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// All entries whose `start_time` falls within the inclusive day span.
    async fn schedules_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// Case-insensitive substring search over titles.
    async fn schedules_by_title(&self, fragment: &str) -> RepositoryResult<Vec<ScheduleEntry>>;

    /// All entries created at or after the cutoff.
    async fn schedules_created_since(
        &self,
        cutoff: NaiveDateTime,
    ) -> RepositoryResult<Vec<ScheduleEntry>>;
}
