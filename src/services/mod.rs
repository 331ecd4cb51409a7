//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository traits. Each
//! resource has a service that validates candidate writes before any store
//! mutation; the schedule service additionally runs conflict detection and
//! serializes same-day writes.

pub mod goals;
pub mod schedules;
pub mod todos;
pub mod validation;

pub use goals::GoalService;
pub use schedules::ScheduleService;
pub use todos::TodoService;

use crate::db::repository::RepositoryError;
use validation::{ConflictError, ValidationError};

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations.
///
/// Tagged union of the failure kinds a request can hit; the HTTP layer maps
/// each kind to a transport status code.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A candidate failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A schedule candidate overlaps an existing same-day entry
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Lookup, update or delete of an unknown identifier
    #[error("{kind} not found with ID: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Store failure
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
