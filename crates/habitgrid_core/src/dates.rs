//! Calendar-date window helpers for the habit table.
//!
//! # Responsibility
//! - Resolve "today" in the system local time zone.
//! - Produce the contiguous n-day window ending today.
//! - Format dates for column headers.
//!
//! # Invariants
//! - All arithmetic is whole-calendar-day (`NaiveDate`), never a fixed
//!   millisecond offset, so DST transitions cannot skip or repeat a day.
//! - Window output is oldest-first, gap-free and duplicate-free.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Returns the current calendar date in the system local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the `n` consecutive calendar dates ending at and including
/// `reference`, oldest first.
///
/// Deterministic in its inputs; `last_n_days` supplies the live `today()`.
/// An `n` of zero yields an empty window.
pub fn window(reference: NaiveDate, n: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n);
    for back in (0..n).rev() {
        // Saturates at the calendar floor; unreachable for real clock input.
        let date = reference
            .checked_sub_days(Days::new(back as u64))
            .unwrap_or(NaiveDate::MIN);
        dates.push(date);
    }
    dates
}

/// Returns the last `n` calendar days up to and including today,
/// oldest first.
///
/// Stable for repeated calls within the same calendar day.
pub fn last_n_days(n: usize) -> Vec<NaiveDate> {
    window(today(), n)
}

/// Formats a date as weekday abbreviation plus day-of-month, e.g. `Mon 3`.
///
/// Display only; never used in comparison logic.
pub fn format_label(date: NaiveDate) -> String {
    format!("{} {}", weekday_abbrev(date), date.day())
}

fn weekday_abbrev(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
