//! Domain model for habit tracking.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one habit-centric shape shared by persistence and rendering.
//!
//! # Invariants
//! - Every domain object is identified by a stable `HabitId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod habit;
