//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical habit record persisted in the snapshot document.
//! - Provide completion-set helpers with involutive toggle semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit.
//! - `name` is non-empty and immutable after creation (no rename operation).
//! - `completed_dates` holds each calendar date at most once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a habit record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type HabitId = Uuid;

/// Validation failure for a habit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// `id` must never be the nil UUID.
    NilId,
    /// `name` must contain at least one non-whitespace character.
    EmptyName,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "habit id must not be nil"),
            Self::EmptyName => write!(f, "habit name must not be empty"),
        }
    }
}

impl Error for HabitValidationError {}

/// A user-defined recurring task tracked by daily completion.
///
/// The serde shape mirrors the persisted snapshot schema:
/// `{ "id": "<uuid>", "name": "...", "completedDates": ["YYYY-MM-DD", ...] }`.
/// `BTreeSet` keeps the serialized date array sorted and duplicate-free while
/// the set itself stays semantically unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Stable global ID used for delete/toggle addressing.
    pub id: HabitId,
    /// Display name, set once at creation.
    pub name: String,
    /// Calendar dates on which this habit was marked done.
    ///
    /// Serialized as `completedDates` to match the external snapshot schema.
    #[serde(rename = "completedDates")]
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Creates a new habit with a generated stable ID and an empty
    /// completion set.
    ///
    /// The name is trimmed; callers are expected to reject blank input
    /// before constructing (see `HabitService::add`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            completed_dates: BTreeSet::new(),
        }
    }

    /// Creates a habit with a caller-provided stable ID.
    ///
    /// Used by deserialization and test paths where identity already exists.
    pub fn with_id(
        id: HabitId,
        name: impl Into<String>,
    ) -> Result<Self, HabitValidationError> {
        let habit = Self {
            id,
            name: name.into().trim().to_string(),
            completed_dates: BTreeSet::new(),
        };
        habit.validate()?;
        Ok(habit)
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyName` when `name` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.id.is_nil() {
            return Err(HabitValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        Ok(())
    }

    /// Flips completion for one calendar date and returns the new membership.
    ///
    /// # Contract
    /// - Date absent: inserted, returns `true`.
    /// - Date present: removed, returns `false`.
    /// - Applying the same toggle twice restores the original set.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.completed_dates.remove(&date) {
            false
        } else {
            self.completed_dates.insert(date);
            true
        }
    }

    /// Returns whether this habit was marked done on `date`.
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }
}
