//! Intersect a base range with a list of constraints.
//!
//! A missing list means "no constraint" and returns the base unchanged; an
//! empty list means "no candidates" and returns nothing.

use tracing::{instrument, trace};

use crate::range::TimeRange;

/// Intersect `base` with each entry of `others`, keeping input order.
///
/// - `others == None`: no constraint, returns `[base]`.
/// - `others == Some(&[])`: zero candidates, returns `[]`.
/// - A `None` entry is the universal range and contributes `base`, unless
///   `base` is zero-length.
/// - A `Some(range)` entry contributes `[max(begin), min(end))`, or nothing
///   if that span is empty.
///
/// Results are not re-sorted.
#[instrument(level = "trace", skip_all, fields(count = others.map(<[_]>::len)))]
pub fn intersect(base: &TimeRange, others: Option<&[Option<TimeRange>]>) -> Vec<TimeRange> {
    let Some(others) = others else {
        return vec![*base];
    };

    let intersections: Vec<TimeRange> = others
        .iter()
        .filter_map(|other| match other {
            Some(other) => base.intersection(other),
            None => Some(*base).filter(|base| !base.is_empty()),
        })
        .collect();

    trace!(intersections = intersections.len(), "intersected ranges");
    intersections
}

impl TimeRange {
    /// Method form of [`intersect`].
    pub fn intersect(&self, others: Option<&[Option<TimeRange>]>) -> Vec<TimeRange> {
        intersect(self, others)
    }
}
