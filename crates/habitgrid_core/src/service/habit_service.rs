//! Habit store use-case service.
//!
//! # Responsibility
//! - Own the in-memory habit collection and apply add/delete/toggle
//!   mutations.
//! - Persist the full collection after every effective mutation.
//!
//! # Invariants
//! - Append order is display order.
//! - Mutations on unknown ids are silent no-ops, never errors.
//! - A failed persistence write leaves in-memory state intact and is not
//!   surfaced to the caller.

use crate::model::habit::{Habit, HabitId};
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::streak::calculate_streak;
use chrono::NaiveDate;
use log::{error, info};

/// The habit store: exclusive owner of the habit collection.
///
/// All mutations run strictly in response to discrete user actions; the
/// rendering layer only reads `habits()` and derived values.
pub struct HabitService<R: SnapshotRepository> {
    repo: R,
    habits: Vec<Habit>,
}

impl<R: SnapshotRepository> HabitService<R> {
    /// Loads the persisted collection, or starts empty when the snapshot is
    /// absent, malformed, or unreadable.
    ///
    /// Construction is infallible: the repository already degrades bad data
    /// to an empty collection, and a transport-level read failure is logged
    /// and recovered the same way.
    pub fn load_or_init(repo: R) -> Self {
        let habits = match repo.load_habits() {
            Ok(habits) => habits,
            Err(err) => {
                error!(
                    "event=snapshot_load module=service status=recovered error={err}"
                );
                Vec::new()
            }
        };

        info!(
            "event=store_init module=service status=ok habit_count={}",
            habits.len()
        );
        Self { repo, habits }
    }

    /// Creates a habit with a fresh id and empty completion set.
    ///
    /// # Contract
    /// - Whitespace-only names are a silent user-input no-op: returns
    ///   `None`, no state change, no persistence write.
    /// - Otherwise appends to the collection (display order), persists, and
    ///   returns the new id.
    pub fn add(&mut self, name: &str) -> Option<HabitId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        let habit = Habit::new(trimmed);
        let id = habit.id;
        self.habits.push(habit);
        info!("event=habit_add module=service status=ok habit_id={id}");
        self.persist();
        Some(id)
    }

    /// Removes the habit with the given id; no-op when absent.
    pub fn delete(&mut self, id: HabitId) {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            return;
        }

        info!("event=habit_delete module=service status=ok habit_id={id}");
        self.persist();
    }

    /// Flips completion of `date` for the habit with the given id.
    ///
    /// Returns the new membership, or `false` without any state change when
    /// the id is unknown.
    pub fn toggle(&mut self, id: HabitId, date: NaiveDate) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return false;
        };

        let completed = habit.toggle(date);
        info!(
            "event=habit_toggle module=service status=ok habit_id={id} date={date} completed={completed}"
        );
        self.persist();
        completed
    }

    /// Read-only view of the collection in display order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Current consecutive-day streak for one habit, `None` for unknown ids.
    pub fn streak_for(&self, id: HabitId, today: NaiveDate) -> Option<u32> {
        self.habits
            .iter()
            .find(|habit| habit.id == id)
            .map(|habit| calculate_streak(&habit.completed_dates, today))
    }

    /// Best-effort full-collection write.
    ///
    /// Failure must not corrupt or roll back in-memory state, so it is
    /// logged and swallowed here instead of being returned.
    fn persist(&self) {
        if let Err(err) = self.repo.save_habits(&self.habits) {
            error!(
                "event=snapshot_save module=service status=error habit_count={} error={err}",
                self.habits.len()
            );
        }
    }
}
