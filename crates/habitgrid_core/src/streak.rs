//! Consecutive-day streak computation.
//!
//! # Responsibility
//! - Derive the current streak from a completion set and a reference date.
//!
//! # Invariants
//! - Pure: output depends only on the two inputs, never on insertion order
//!   or hidden state.
//! - A streak alive through yesterday survives an unmarked today; missing
//!   both today and yesterday breaks it.
//! - Streaks are not capped at the 7-day display window.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Returns the current consecutive-day streak ending at `today` or
/// yesterday.
///
/// # Contract
/// - Empty set: 0.
/// - Anchor is `today` when marked, else yesterday when marked, else the
///   run is broken and the result is 0.
/// - From the anchor the walk moves backward one calendar day at a time,
///   counting consecutive members; the anchor itself counts.
pub fn calculate_streak(completed: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    if completed.is_empty() {
        return 0;
    }

    let anchor = if completed.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if completed.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 1;
    let mut cursor = anchor;
    // pred_opt returns None at the calendar floor, which ends the walk
    // the same way a gap does.
    while let Some(previous) = cursor.pred_opt() {
        if !completed.contains(&previous) {
            break;
        }
        streak += 1;
        cursor = previous;
    }

    streak
}
