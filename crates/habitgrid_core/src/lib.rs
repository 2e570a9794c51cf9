//! Core domain logic for HabitGrid.
//! This crate is the single source of truth for business invariants.

pub mod dates;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod streak;

pub use dates::{format_label, last_n_days, today, window};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, HabitId, HabitValidationError};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, HABITS_SNAPSHOT_KEY,
};
pub use service::habit_service::HabitService;
pub use streak::calculate_streak;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
