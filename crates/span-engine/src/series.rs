//! Derive ranges from time-indexed series.
//!
//! A series is any collection of `(instant, value)` pairs, typically a
//! `HashMap` or `BTreeMap`. Iteration order is never trusted: samples are
//! sorted by instant before scanning. A range opens at the first sample that
//! is "on" and closes at the next sample that is "off".

use chrono::{DateTime, TimeZone, Utc};
use tracing::{instrument, trace};

use crate::policy::TrailingPolicy;
use crate::range::{RangeEnd, TimeRange};

/// Build ranges from a boolean pulse series.
///
/// ```text
/// input:   + - + - + + - -
/// output:  |-| |-| |---|
/// ```
///
/// A series that ends while on yields a trailing unbounded range; see
/// [`from_pulse_with`] to drop it instead.
pub fn from_pulse<Tz, I>(pulse: I) -> Vec<TimeRange>
where
    Tz: TimeZone,
    I: IntoIterator<Item = (DateTime<Tz>, bool)>,
{
    from_pulse_with(pulse, TrailingPolicy::default())
}

/// Build ranges from a boolean pulse series with an explicit [`TrailingPolicy`].
pub fn from_pulse_with<Tz, I>(pulse: I, trailing: TrailingPolicy) -> Vec<TimeRange>
where
    Tz: TimeZone,
    I: IntoIterator<Item = (DateTime<Tz>, bool)>,
{
    scan(sorted_samples(pulse), trailing, |on| *on)
}

/// Build ranges from a threshold series: a sample is on when `value >= min`.
///
/// ```text
/// input:   0 0 1 2 0 1 0 2     (min = 1)
/// output:      |---| |-| |--...
/// ```
///
/// Values that do not compare with `min` (such as NaN) count as off. A series
/// whose last sample is on yields a trailing unbounded range.
pub fn from_threshold<Tz, T, I>(values: I, min: T) -> Vec<TimeRange>
where
    Tz: TimeZone,
    T: PartialOrd,
    I: IntoIterator<Item = (DateTime<Tz>, T)>,
{
    from_threshold_with(values, min, TrailingPolicy::default())
}

/// Build ranges from a threshold series with an explicit [`TrailingPolicy`].
pub fn from_threshold_with<Tz, T, I>(values: I, min: T, trailing: TrailingPolicy) -> Vec<TimeRange>
where
    Tz: TimeZone,
    T: PartialOrd,
    I: IntoIterator<Item = (DateTime<Tz>, T)>,
{
    scan(sorted_samples(values), trailing, |value| *value >= min)
}

/// Normalize instants to UTC and sort chronologically.
fn sorted_samples<Tz, V, I>(series: I) -> Vec<(DateTime<Utc>, V)>
where
    Tz: TimeZone,
    I: IntoIterator<Item = (DateTime<Tz>, V)>,
{
    let mut samples: Vec<(DateTime<Utc>, V)> = series
        .into_iter()
        .map(|(instant, value)| (instant.with_timezone(&Utc), value))
        .collect();
    samples.sort_by_key(|(instant, _)| *instant);
    samples
}

#[instrument(level = "trace", skip_all, fields(samples = samples.len(), trailing = ?trailing))]
fn scan<V>(
    samples: Vec<(DateTime<Utc>, V)>,
    trailing: TrailingPolicy,
    is_on: impl Fn(&V) -> bool,
) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    let mut pending: Option<DateTime<Utc>> = None;

    for (instant, value) in &samples {
        match (pending, is_on(value)) {
            (None, true) => pending = Some(*instant),
            (Some(start), false) => {
                ranges.push(TimeRange::from_bounds(start, RangeEnd::Finite(*instant)));
                pending = None;
            }
            // Repeated on or off: nothing changes.
            _ => {}
        }
    }

    if let (Some(start), TrailingPolicy::Open) = (pending, trailing) {
        ranges.push(TimeRange::from_bounds(start, RangeEnd::Unbounded));
    }

    trace!(ranges = ranges.len(), "scanned series");
    ranges
}
