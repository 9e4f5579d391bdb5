//! Tests for intersecting a base range with a list of constraints.

use chrono::{DateTime, Duration, TimeZone, Utc};
use span_engine::{intersect, TimeRange};

fn at(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap() + Duration::minutes(minute)
}

fn range(begin: i64, end: i64) -> TimeRange {
    TimeRange::new(at(begin), at(end)).unwrap()
}

#[test]
fn results_follow_input_order_and_skip_disjoint_entries() {
    let base = TimeRange::from_duration(at(0), Duration::hours(1)); // 00:00 - 01:00
    let before = TimeRange::from_duration(at(-20), Duration::minutes(10)); // -0:20 - -0:10
    let inside = range(20, 50); // 00:20 - 00:50
    let inside_and_after = TimeRange::open(at(30)); // 00:30 - ∞

    let intersections = intersect(
        &base,
        Some(&[Some(inside_and_after), Some(before), Some(inside)]),
    );

    assert_eq!(intersections, vec![range(30, 60), range(20, 50)]);
}

#[test]
fn no_constraint_returns_base() {
    let base = range(0, 60);
    assert_eq!(intersect(&base, None), vec![base]);
}

#[test]
fn zero_constraints_return_nothing() {
    let base = range(0, 60);
    assert!(intersect(&base, Some(&[])).is_empty());
}

#[test]
fn missing_entry_is_the_universal_range() {
    let base = range(0, 60);
    let result = intersect(&base, Some(&[None, Some(range(10, 20))]));
    assert_eq!(result, vec![base, range(10, 20)]);
}

#[test]
fn adjacent_entry_is_omitted() {
    let base = range(0, 60);
    assert!(intersect(&base, Some(&[Some(range(60, 90)), Some(range(-30, 0))])).is_empty());
}

#[test]
fn zero_length_entry_is_omitted() {
    let base = range(0, 60);
    assert!(intersect(&base, Some(&[Some(range(30, 30))])).is_empty());
}

#[test]
fn zero_length_base_with_missing_entry_is_omitted() {
    // A missing entry behaves like a range covering every instant.
    let base = range(30, 30);
    let everything = TimeRange::open(DateTime::<Utc>::MIN_UTC);
    assert!(intersect(&base, Some(&[None])).is_empty());
    assert_eq!(
        intersect(&base, Some(&[None])),
        intersect(&base, Some(&[Some(everything)]))
    );
    assert_eq!(intersect(&base, None), vec![base]);
}

#[test]
fn unbounded_base_and_entry_stay_unbounded() {
    let base = TimeRange::open(at(0));
    let result = intersect(&base, Some(&[Some(TimeRange::open(at(10))), Some(range(-5, 5))]));
    assert_eq!(result, vec![TimeRange::open(at(10)), range(0, 5)]);
}

#[test]
fn duplicate_entries_are_kept() {
    let base = range(0, 60);
    let entry = Some(range(10, 20));
    assert_eq!(
        intersect(&base, Some(&[entry, entry])),
        vec![range(10, 20), range(10, 20)]
    );
}

#[test]
fn method_form_matches_free_function() {
    let base = range(0, 60);
    let others = [Some(range(-10, 10)), Some(range(50, 70))];
    assert_eq!(base.intersect(Some(&others)), intersect(&base, Some(&others)));
    assert_eq!(base.intersect(Some(&others)), vec![range(0, 10), range(50, 60)]);
}
