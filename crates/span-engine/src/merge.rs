//! Union and partition of range collections.
//!
//! [`merge`] collapses overlapping and touching ranges into the coarsest
//! disjoint cover. [`slice`] covers the same union but cuts it at every
//! boundary found in the input.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{instrument, trace};

use crate::range::{RangeEnd, TimeRange};

/// Merge overlapping or adjacent ranges.
///
/// Input order does not matter. Returns a sorted, non-overlapping,
/// non-adjacent list. An unbounded range absorbs every range that begins at or
/// after its own begin.
#[instrument(level = "trace", skip_all, fields(count = ranges.len()))]
pub fn merge(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted = ranges.to_vec();
    // Sort by begin (then by end for stability).
    sorted.sort_unstable();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if RangeEnd::Finite(range.begin()) <= last.end() {
                // Overlapping or adjacent: extend the current range.
                *last = TimeRange::from_bounds(last.begin(), last.end().max(range.end()));
                continue;
            }
        }
        merged.push(range);
    }

    trace!(merged = merged.len(), "merged ranges");
    merged
}

/// Partition the union of `ranges` into the finest disjoint pieces.
///
/// Every `begin` and finite `end` in the input becomes a cut point, and a
/// piece between two consecutive cut points is emitted only if some input
/// covers it. Zero-length inputs add a cut point without adding coverage.
/// Returns ranges sorted by begin; the last one is unbounded if an unbounded
/// input reaches past the final cut point.
#[instrument(level = "trace", skip_all, fields(count = ranges.len()))]
pub fn slice(ranges: &[TimeRange]) -> Vec<TimeRange> {
    // Net change in coverage at each boundary: +1 per begin, -1 per finite end.
    let mut deltas: BTreeMap<DateTime<Utc>, i64> = BTreeMap::new();
    for range in ranges {
        *deltas.entry(range.begin()).or_default() += 1;
        if let RangeEnd::Finite(end) = range.end() {
            *deltas.entry(end).or_default() -= 1;
        }
    }

    let mut slices = Vec::new();
    let mut active = 0_i64;
    let mut previous: Option<DateTime<Utc>> = None;
    for (cut, delta) in deltas {
        if let Some(start) = previous {
            if active > 0 {
                slices.push(TimeRange::from_bounds(start, RangeEnd::Finite(cut)));
            }
        }
        active += delta;
        previous = Some(cut);
    }

    // Anything still active past the last cut is an unbounded input.
    if let Some(start) = previous {
        if active > 0 {
            slices.push(TimeRange::from_bounds(start, RangeEnd::Unbounded));
        }
    }

    trace!(slices = slices.len(), "sliced ranges");
    slices
}
