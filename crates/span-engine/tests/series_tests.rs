//! Tests for deriving ranges from pulse and threshold series.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Europe::Berlin;
use span_engine::{from_pulse, from_pulse_with, from_threshold, from_threshold_with};
use span_engine::{TimeRange, TrailingPolicy};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap() + Duration::minutes(minute)
}

fn range(begin: i64, end: i64) -> TimeRange {
    TimeRange::new(at(begin), at(end)).unwrap()
}

/// Samples at minutes 1, 2, 3, ... in a `HashMap`, so iteration order is arbitrary.
fn series<V: Copy>(values: &[V]) -> HashMap<DateTime<Utc>, V> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| (at(i as i64 + 1), *value))
        .collect()
}

// ── Pulse ───────────────────────────────────────────────────────────────────

#[test]
fn pulse_opens_on_true_and_closes_on_false() {
    /*
     * input:    + - + - + + - -
     * output:   |-| |-| |---|
     */
    let pulse = series(&[true, false, true, false, true, true, false, false]);

    let ranges = from_pulse(pulse);

    assert_eq!(ranges, vec![range(1, 2), range(3, 4), range(5, 7)]);
}

#[test]
fn pulse_ending_on_is_open_by_default() {
    let pulse = series(&[false, true, false, true, true]);
    assert_eq!(
        from_pulse(pulse),
        vec![range(2, 3), TimeRange::open(at(4))]
    );
}

#[test]
fn pulse_ending_on_can_be_dropped() {
    let pulse = series(&[false, true, false, true, true]);
    assert_eq!(
        from_pulse_with(pulse, TrailingPolicy::Drop),
        vec![range(2, 3)]
    );
}

#[test]
fn pulse_all_off_or_empty_gives_nothing() {
    assert!(from_pulse(series(&[false, false, false])).is_empty());
    assert!(from_pulse(HashMap::<DateTime<Utc>, bool>::new()).is_empty());
}

#[test]
fn pulse_keys_in_mixed_timezones_are_sorted_by_instant() {
    let pulse = vec![
        (at(3).with_timezone(&Berlin), false),
        (at(1).with_timezone(&Berlin), true),
    ];
    assert_eq!(from_pulse(pulse), vec![range(1, 3)]);
}

// ── Threshold ───────────────────────────────────────────────────────────────

#[test]
fn threshold_last_sample_on_gives_unbounded_range() {
    /*
     * input:    0 0 1 2 0 1 0 2
     * output:       |---| |-| |--...
     */
    let values = series(&[0, 0, 1, 2, 0, 1, 0, 2]);

    let ranges = from_threshold(values, 1);

    assert_eq!(
        ranges,
        vec![range(3, 5), range(6, 7), TimeRange::open(at(8))]
    );
}

#[test]
fn threshold_trailing_range_can_be_dropped() {
    let values = series(&[0, 0, 1, 2, 0, 1, 0, 2]);
    assert_eq!(
        from_threshold_with(values, 1, TrailingPolicy::Drop),
        vec![range(3, 5), range(6, 7)]
    );
}

#[test]
fn threshold_is_inclusive() {
    let values = series(&[4, 5, 6, 4]);
    assert_eq!(from_threshold(values, 5), vec![range(2, 4)]);
}

#[test]
fn threshold_over_floats_treats_nan_as_off() {
    let values: BTreeMap<DateTime<Utc>, f64> = [
        (at(1), 0.5),
        (at(2), f64::NAN),
        (at(3), 0.7),
        (at(4), 0.1),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        from_threshold(values, 0.5),
        vec![range(1, 2), range(3, 4)]
    );
}

#[test]
fn threshold_over_strings() {
    let values = series(&["a", "m", "z", "b"]);
    assert_eq!(from_threshold(values, "k"), vec![range(2, 4)]);
}

#[test]
fn factories_are_repeatable() {
    let pulse = series(&[true, false, true]);
    assert_eq!(from_pulse(pulse.clone()), from_pulse(pulse));
}
