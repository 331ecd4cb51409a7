//! Axum-based HTTP server module.
//!
//! Exposes the REST API described in the handler docs: goal, todo and
//! schedule resources under `/api`, plus a `/health` probe.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
