//! Field validation and conflict detection for incoming writes.
//!
//! Everything in this module is a pure function of its inputs: the conflict
//! check receives the candidate interval and the already-persisted same-day
//! entries from the caller instead of querying the store itself. The service
//! layer composes these checks with the repository; the HTTP layer maps the
//! error kinds to response codes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::ScheduleEntry;

/// Maximum accepted title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Candidate fields for a schedule write, before persistence.
///
/// All fields are optional so that absent inputs surface as validation
/// errors rather than deserialization failures.
#[derive(Debug, Clone, Default)]
pub struct ScheduleDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

/// Candidate fields for a goal write.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
}

/// Candidate fields for a todo write.
#[derive(Debug, Clone, Default)]
pub struct TodoDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
    pub date: Option<NaiveDateTime>,
}

/// Field-level validation failure for a submitted candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    InvalidTitle,
    #[error("Title cannot exceed {MAX_TITLE_LENGTH} characters")]
    TitleTooLong,
    #[error("Start time is required")]
    MissingStartTime,
    #[error("End time is required")]
    MissingEndTime,
    #[error("Start time must be strictly before end time")]
    InvalidInterval,
    #[error("Date is required")]
    MissingDate,
}

impl ValidationError {
    /// Wire-format name of the offending field, used to build the
    /// field-to-message map in error responses.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidTitle | ValidationError::TitleTooLong => "title",
            ValidationError::MissingStartTime => "startTime",
            ValidationError::MissingEndTime => "endTime",
            ValidationError::InvalidInterval => "startTime",
            ValidationError::MissingDate => "date",
        }
    }
}

/// A candidate interval overlapping an already-persisted entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Time conflict detected with existing schedule '{title}' (ID: {id})")]
pub struct ConflictError {
    /// Identifier of the conflicting entry
    pub id: String,
    /// Title of the conflicting entry
    pub title: String,
}

fn validate_title(title: Option<&str>) -> Result<(), ValidationError> {
    let title = title.ok_or(ValidationError::InvalidTitle)?;
    if title.trim().is_empty() {
        return Err(ValidationError::InvalidTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Validate the fields of a schedule candidate, failing fast on the first
/// violation: title present and non-blank, title length, start present, end
/// present, start strictly before end. Equal start and end is invalid.
pub fn validate_schedule_draft(draft: &ScheduleDraft) -> Result<(), ValidationError> {
    validate_title(draft.title.as_deref())?;
    let start = draft.start_time.ok_or(ValidationError::MissingStartTime)?;
    let end = draft.end_time.ok_or(ValidationError::MissingEndTime)?;
    if start >= end {
        return Err(ValidationError::InvalidInterval);
    }
    Ok(())
}

/// Validate the fields of a goal candidate.
pub fn validate_goal_draft(draft: &GoalDraft) -> Result<(), ValidationError> {
    validate_title(draft.title.as_deref())?;
    draft.date.ok_or(ValidationError::MissingDate)?;
    Ok(())
}

/// Validate the fields of a todo candidate.
pub fn validate_todo_draft(draft: &TodoDraft) -> Result<(), ValidationError> {
    validate_title(draft.title.as_deref())?;
    draft.date.ok_or(ValidationError::MissingDate)?;
    Ok(())
}

/// Half-open interval overlap test: `[a_start, a_end)` intersects
/// `[b_start, b_end)`. Intervals that merely touch at an endpoint do not
/// overlap.
pub fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Check the candidate interval against the entries already scheduled on its
/// calendar day, skipping `exclude_id` (the entry's own id on update).
///
/// Reports the first conflicting entry in iteration order. The caller
/// supplies the same-day set; calling this twice with identical inputs
/// yields identical results.
pub fn check_conflicts(
    start: NaiveDateTime,
    end: NaiveDateTime,
    same_day_entries: &[ScheduleEntry],
    exclude_id: Option<&str>,
) -> Result<(), ConflictError> {
    for existing in same_day_entries {
        if let (Some(id), Some(excluded)) = (existing.id.as_deref(), exclude_id) {
            if id == excluded {
                continue;
            }
        }
        if intervals_overlap(start, end, existing.start_time, existing.end_time) {
            return Err(ConflictError {
                id: existing.id.clone().unwrap_or_default(),
                title: existing.title.clone(),
            });
        }
    }
    Ok(())
}

/// Calendar day window: local midnight through the last representable
/// microsecond before the next midnight.
pub fn day_window(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date.and_hms_micro_opt(23, 59, 59, 999_999).unwrap();
    (start, end)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
