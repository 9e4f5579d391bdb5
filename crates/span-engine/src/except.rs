//! Subtract a union of ranges from a base range.
//!
//! Clips the subtracted ranges to the base, merges them into holes, then
//! walks the base collecting the gaps between holes.

use tracing::{instrument, trace};

use crate::merge::merge;
use crate::range::{RangeEnd, TimeRange};

/// Remove the union of `subtract` from `base`.
///
/// `None` for the whole list, and `None` entries within it, subtract nothing.
/// Entries that do not overlap `base` are ignored. Returns the remaining
/// positive-length pieces of `base`, sorted by begin: `[base]` when nothing
/// overlaps, `[]` when `base` is fully covered.
#[instrument(level = "trace", skip_all, fields(count = subtract.map(<[_]>::len)))]
pub fn except(base: &TimeRange, subtract: Option<&[Option<TimeRange>]>) -> Vec<TimeRange> {
    // Clip to the base, discarding missing and non-overlapping entries.
    let clipped: Vec<TimeRange> = subtract
        .unwrap_or_default()
        .iter()
        .flatten()
        .filter_map(|range| base.intersection(range))
        .collect();

    if clipped.is_empty() {
        return vec![*base];
    }

    let holes = merge(&clipped);

    let mut remaining = Vec::new();
    // An unbounded cursor means a hole ran to infinity and nothing is left.
    let mut cursor = RangeEnd::Finite(base.begin());

    for hole in &holes {
        if let RangeEnd::Finite(from) = cursor {
            if from < hole.begin() {
                remaining.push(TimeRange::from_bounds(from, RangeEnd::Finite(hole.begin())));
            }
        }
        cursor = cursor.max(hole.end());
    }

    // Trailing piece after the last hole.
    if let RangeEnd::Finite(from) = cursor {
        if cursor < base.end() {
            remaining.push(TimeRange::from_bounds(from, base.end()));
        }
    }

    trace!(remaining = remaining.len(), "subtracted ranges");
    remaining
}

impl TimeRange {
    /// Method form of [`except`].
    pub fn except(&self, subtract: Option<&[Option<TimeRange>]>) -> Vec<TimeRange> {
        except(self, subtract)
    }
}
