use chrono::NaiveDate;
use habitgrid_core::calculate_streak;
use std::collections::BTreeSet;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn set(dates: &[NaiveDate]) -> BTreeSet<NaiveDate> {
    dates.iter().copied().collect()
}

// Fixed reference date used throughout: a mid-month day with room to walk
// backward across no boundaries in particular.
fn reference() -> NaiveDate {
    date(2026, 3, 14)
}

#[test]
fn empty_set_has_no_streak() {
    assert_eq!(calculate_streak(&BTreeSet::new(), reference()), 0);
}

#[test]
fn today_alone_counts_one() {
    let completed = set(&[reference()]);
    assert_eq!(calculate_streak(&completed, reference()), 1);
}

#[test]
fn three_consecutive_days_through_today_count_three() {
    let completed = set(&[date(2026, 3, 14), date(2026, 3, 13), date(2026, 3, 12)]);
    assert_eq!(calculate_streak(&completed, reference()), 3);
}

#[test]
fn yesterday_alone_keeps_the_streak_alive() {
    // Today not yet marked; the run through yesterday still counts.
    let completed = set(&[date(2026, 3, 13)]);
    assert_eq!(calculate_streak(&completed, reference()), 1);
}

#[test]
fn run_ending_yesterday_counts_in_full() {
    let completed = set(&[date(2026, 3, 13), date(2026, 3, 12), date(2026, 3, 11)]);
    assert_eq!(calculate_streak(&completed, reference()), 3);
}

#[test]
fn missing_today_and_yesterday_breaks_the_streak() {
    let completed = set(&[date(2026, 3, 12)]);
    assert_eq!(calculate_streak(&completed, reference()), 0);
}

#[test]
fn gap_at_yesterday_limits_streak_to_today() {
    let completed = set(&[date(2026, 3, 14), date(2026, 3, 12)]);
    assert_eq!(calculate_streak(&completed, reference()), 1);
}

#[test]
fn streak_may_exceed_the_display_window() {
    // Ten consecutive days ending today; the table only ever shows seven.
    let completed: BTreeSet<_> = (0..10)
        .map(|back| date(2026, 3, 14 - back))
        .collect();
    assert_eq!(calculate_streak(&completed, reference()), 10);
}

#[test]
fn streak_walks_across_month_boundary() {
    let completed = set(&[date(2026, 3, 1), date(2026, 2, 28), date(2026, 2, 27)]);
    assert_eq!(calculate_streak(&completed, date(2026, 3, 1)), 3);
}

#[test]
fn unrelated_dates_do_not_inflate_the_streak() {
    let completed = set(&[
        date(2026, 3, 14),
        date(2026, 3, 13),
        date(2026, 3, 10),
        date(2026, 2, 1),
    ]);
    assert_eq!(calculate_streak(&completed, reference()), 2);
}

#[test]
fn result_is_independent_of_insertion_order() {
    let forward = set(&[date(2026, 3, 12), date(2026, 3, 13), date(2026, 3, 14)]);
    let backward = set(&[date(2026, 3, 14), date(2026, 3, 13), date(2026, 3, 12)]);
    assert_eq!(
        calculate_streak(&forward, reference()),
        calculate_streak(&backward, reference())
    );
}

#[test]
fn future_dates_beyond_today_are_ignored_by_anchor_selection() {
    // A marked tomorrow neither anchors nor extends the streak.
    let completed = set(&[date(2026, 3, 15)]);
    assert_eq!(calculate_streak(&completed, reference()), 0);
}
