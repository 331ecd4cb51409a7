//! Store module for the scheduler's document persistence.
//!
//! This module provides abstractions for store operations via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Business Logic             │
//! │  - Field validation                                     │
//! │  - Conflict detection for schedule writes               │
//! │  - Per-day write serialization                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The store handle is created once (see [`factory::RepositoryFactory`]) and
//! passed explicitly into the services; nothing in this crate reaches for a
//! global store instance.

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use repo_config::RepositoryConfig;

// Repository trait and implementations
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{
    FullRepository, GoalRepository, RepositoryError, RepositoryResult, ScheduleRepository,
    TodoRepository,
};
