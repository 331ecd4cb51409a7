//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies deliberately keep every candidate field optional: absent
//! or null fields must reach the validator (surfacing as 400 validation
//! errors with a field map) instead of being rejected during
//! deserialization. Responses serialize the domain models directly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::services::validation::{GoalDraft, ScheduleDraft, TodoDraft};

/// Request body for creating or replacing a schedule entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
}

impl From<ScheduleRequest> for ScheduleDraft {
    fn from(request: ScheduleRequest) -> Self {
        ScheduleDraft {
            title: request.title,
            description: request.description,
            start_time: request.start_time,
            end_time: request.end_time,
        }
    }
}

/// Request body for creating or replacing a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
}

impl From<GoalRequest> for GoalDraft {
    fn from(request: GoalRequest) -> Self {
        GoalDraft {
            title: request.title,
            description: request.description,
            date: request.date,
        }
    }
}

/// Request body for creating or replacing a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
}

impl From<TodoRequest> for TodoDraft {
    fn from(request: TodoRequest) -> Self {
        TodoDraft {
            title: request.title,
            description: request.description,
            completed: request.completed,
            date: request.date,
        }
    }
}

/// Query parameters for date-range endpoints. Dates are `yyyy-MM-dd`
/// strings, parsed in the handler so malformed input gets the standard
/// error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

/// Query parameters for title search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

/// Query parameters for recent-items endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RecentQuery {
    /// Days to look back (default: 7)
    #[serde(default)]
    pub days: Option<i64>,
}

/// Query parameters for the todo count endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionQuery {
    pub is_completed: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}
