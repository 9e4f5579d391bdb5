//! # span-engine
//!
//! Interval algebra over time.
//!
//! A [`TimeRange`] is a half-open span of instants `[begin, end)` whose end may
//! be unbounded. Bounds are normalized to UTC, so ranges compare and hash by the
//! instants they denote regardless of the timezone they were built in. The set
//! operations are pure functions over slices of ranges.
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange` value type and its `RangeEnd` bound
//! - [`format`] — Pattern and locale rendering of `"<begin> - <end>"`
//! - [`merge`] — Union (`merge`) and finest partition (`slice`) of ranges
//! - [`intersect`] — Intersect a base range with a list of constraints
//! - [`except`] — Subtract a union of ranges from a base range
//! - [`series`] — Ranges from boolean pulse and threshold series
//! - [`policy`] — Trailing-sample policy for the series factories
//! - [`error`] — Error types

pub mod error;
pub mod except;
pub mod format;
pub mod intersect;
pub mod merge;
pub mod policy;
pub mod range;
pub mod series;

pub use error::RangeError;
pub use except::except;
pub use format::{OpenEndStyle, RangeDisplay};
pub use intersect::intersect;
pub use merge::{merge, slice};
pub use policy::TrailingPolicy;
pub use range::{RangeEnd, TimeRange};
pub use series::{from_pulse, from_pulse_with, from_threshold, from_threshold_with};
