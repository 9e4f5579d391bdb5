//! The [`TimeRange`] value type: a half-open span of instants `[begin, end)`.
//!
//! Both bounds are normalized to UTC on construction, so ranges built from
//! different timezones compare and hash by the instants they denote. The end
//! may be [`RangeEnd::Unbounded`], meaning the range extends indefinitely into
//! the future.

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};

/// Upper bound of a [`TimeRange`].
///
/// `Unbounded` sorts after every `Finite` instant, so `max`/`min` and the
/// comparison operators treat it as positive infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RangeEnd {
    Finite(DateTime<Utc>),
    Unbounded,
}

impl RangeEnd {
    /// The finite instant, or `None` when unbounded.
    pub fn instant(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Finite(instant) => Some(instant),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    fn checked_add(self, duration: Duration) -> Option<Self> {
        match self {
            Self::Finite(instant) => instant.checked_add_signed(duration).map(Self::Finite),
            Self::Unbounded => Some(Self::Unbounded),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for RangeEnd {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::Finite(instant.with_timezone(&Utc))
    }
}

impl<Tz: TimeZone> From<Option<DateTime<Tz>>> for RangeEnd {
    fn from(instant: Option<DateTime<Tz>>) -> Self {
        instant.map_or(Self::Unbounded, Self::from)
    }
}

/// # Panics
///
/// Panics if a finite end leaves chrono's representable range.
impl Add<Duration> for RangeEnd {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        match self {
            Self::Finite(instant) => Self::Finite(instant + rhs),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

/// # Panics
///
/// Panics if a finite end leaves chrono's representable range.
impl Sub<Duration> for RangeEnd {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        match self {
            Self::Finite(instant) => Self::Finite(instant - rhs),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

/// A half-open span of instants `[begin, end)`.
///
/// Equality, ordering and hashing are derived from the normalized bounds:
/// ranges order by `begin`, then by `end`, with an unbounded end last.
///
/// # Invariants
/// `begin <= end` whenever `end` is finite. A zero-length range (`begin == end`)
/// is legal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    begin: DateTime<Utc>,
    end: RangeEnd,
}

impl TimeRange {
    /// Build a range from explicit bounds.
    ///
    /// `end` accepts any `DateTime<Tz>`, an `Option<DateTime<Tz>>` (`None` is
    /// unbounded), or a [`RangeEnd`] directly.
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidRange`] if a finite `end` precedes `begin`.
    /// Explicit bounds are never swapped; use [`TimeRange::from_duration`] for
    /// a normalizing constructor.
    pub fn new<Tz: TimeZone>(begin: DateTime<Tz>, end: impl Into<RangeEnd>) -> Result<Self> {
        let begin = begin.with_timezone(&Utc);
        let end = end.into();
        if let RangeEnd::Finite(end) = end {
            if end < begin {
                return Err(RangeError::InvalidRange { begin, end });
            }
        }
        Ok(Self { begin, end })
    }

    /// A range starting at `begin` and never ending.
    pub fn open<Tz: TimeZone>(begin: DateTime<Tz>) -> Self {
        Self {
            begin: begin.with_timezone(&Utc),
            end: RangeEnd::Unbounded,
        }
    }

    /// A range spanning `start` and `start + duration`.
    ///
    /// A negative duration yields a range ending at `start`.
    ///
    /// # Panics
    /// Panics if `start + duration` leaves chrono's representable range. See
    /// [`TimeRange::try_from_duration`] for the checked variant.
    pub fn from_duration<Tz: TimeZone>(start: DateTime<Tz>, duration: Duration) -> Self {
        let start = start.with_timezone(&Utc);
        Self::sorted(start, start + duration)
    }

    /// Checked form of [`TimeRange::from_duration`].
    ///
    /// # Errors
    /// Returns [`RangeError::OutOfRange`] if `start + duration` overflows.
    pub fn try_from_duration<Tz: TimeZone>(start: DateTime<Tz>, duration: Duration) -> Result<Self> {
        let start = start.with_timezone(&Utc);
        let other = start
            .checked_add_signed(duration)
            .ok_or_else(|| RangeError::OutOfRange(format!("{start} + {duration}")))?;
        Ok(Self::sorted(start, other))
    }

    fn sorted(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            begin: a.min(b),
            end: RangeEnd::Finite(a.max(b)),
        }
    }

    /// Assemble a range whose invariant the caller already guarantees.
    pub(crate) fn from_bounds(begin: DateTime<Utc>, end: RangeEnd) -> Self {
        debug_assert!(RangeEnd::Finite(begin) <= end, "begin must not exceed end");
        Self { begin, end }
    }

    pub fn begin(&self) -> DateTime<Utc> {
        self.begin
    }

    pub fn end(&self) -> RangeEnd {
        self.end
    }

    /// The finite end, or `None` when unbounded.
    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        self.end.instant()
    }

    pub fn is_unbounded(&self) -> bool {
        self.end.is_unbounded()
    }

    /// True for a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.end == RangeEnd::Finite(self.begin)
    }

    /// Length of the range, or `None` when unbounded.
    pub fn duration(&self) -> Option<Duration> {
        self.end.instant().map(|end| end - self.begin)
    }

    /// True if `instant` lies in `[begin, end)`.
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let instant = instant.with_timezone(&Utc);
        self.begin <= instant && RangeEnd::Finite(instant) < self.end
    }

    /// True if the two ranges share at least one instant.
    ///
    /// Touching ranges (`a.end == b.begin`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        RangeEnd::Finite(self.begin) < other.end && RangeEnd::Finite(other.begin) < self.end
    }

    /// True if the ranges overlap or are adjacent.
    pub fn touches(&self, other: &Self) -> bool {
        RangeEnd::Finite(self.begin) <= other.end && RangeEnd::Finite(other.begin) <= self.end
    }

    /// The common part of both ranges, or `None` if it would be empty.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let begin = self.begin.max(other.begin);
        let end = self.end.min(other.end);
        (RangeEnd::Finite(begin) < end).then_some(Self { begin, end })
    }

    /// Move both bounds by `duration`. An unbounded end stays unbounded.
    ///
    /// # Panics
    /// Panics if a bound leaves chrono's representable range.
    pub fn shift(self, duration: Duration) -> Self {
        self + duration
    }

    /// Checked form of [`TimeRange::shift`].
    pub fn checked_shift(self, duration: Duration) -> Option<Self> {
        Some(Self {
            begin: self.begin.checked_add_signed(duration)?,
            end: self.end.checked_add(duration)?,
        })
    }
}

impl Add<Duration> for TimeRange {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self {
            begin: self.begin + rhs,
            end: self.end + rhs,
        }
    }
}

impl Sub<Duration> for TimeRange {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self {
            begin: self.begin - rhs,
            end: self.end - rhs,
        }
    }
}

impl AddAssign<Duration> for TimeRange {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign<Duration> for TimeRange {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Debug for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.end {
            RangeEnd::Finite(end) => write!(f, "{:?}..{:?}", self.begin, end),
            RangeEnd::Unbounded => write!(f, "{:?}..", self.begin),
        }
    }
}

/// Renders `"<begin> - <end>"` with RFC 3339 bounds.
impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display("%+"), f)
    }
}

/// Wire shape of a [`TimeRange`]; `end: null` is unbounded.
#[derive(Serialize, Deserialize)]
struct RawRange {
    begin: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Self::new(raw.begin, raw.end)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        Self {
            begin: range.begin,
            end: range.end.instant(),
        }
    }
}
