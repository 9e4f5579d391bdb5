//! Pattern-based rendering of ranges as `"<begin> - <end>"`.
//!
//! Both bounds go through the same chrono strftime pattern, optionally with a
//! locale. Bounds are rendered in UTC unless a display timezone is given with
//! [`TimeRange::display_in`] or [`TimeRange::format_in`].

use std::fmt::{self, Display, Formatter, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, TimeZone, Utc};

use crate::error::{RangeError, Result};
use crate::range::{RangeEnd, TimeRange};

/// How an unbounded end is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenEndStyle<'a> {
    /// Render `DateTime::<Utc>::MAX_UTC` through the pattern. Always in UTC:
    /// zones east of UTC would push it past chrono's representable range.
    #[default]
    MaxInstant,
    /// Render a literal token, e.g. `"∞"` or `"open"`.
    Marker(&'a str),
}

/// A [`TimeRange`] paired with a display pattern and timezone. Created by
/// [`TimeRange::display`] or [`TimeRange::display_in`].
///
/// Like chrono's `DelayedFormat`, writing fails with [`fmt::Error`] when the
/// pattern is invalid; [`TimeRange::format`] checks the pattern up front.
#[derive(Debug, Clone, Copy)]
pub struct RangeDisplay<'a, Tz: TimeZone = Utc> {
    range: TimeRange,
    pattern: &'a str,
    timezone: Tz,
    locale: Option<Locale>,
    open_end: OpenEndStyle<'a>,
}

impl<'a, Tz: TimeZone> RangeDisplay<'a, Tz>
where
    Tz::Offset: Display,
{
    /// Format bounds with locale-specific month and weekday names.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn open_end(mut self, style: OpenEndStyle<'a>) -> Self {
        self.open_end = style;
        self
    }

    fn write_bound(&self, f: &mut Formatter<'_>, instant: DateTime<Utc>) -> fmt::Result {
        self.write_instant(f, instant.with_timezone(&self.timezone))
    }

    fn write_instant<Z: TimeZone>(&self, f: &mut Formatter<'_>, instant: DateTime<Z>) -> fmt::Result
    where
        Z::Offset: Display,
    {
        match self.locale {
            Some(locale) => write!(f, "{}", instant.format_localized(self.pattern, locale)),
            None => write!(f, "{}", instant.format(self.pattern)),
        }
    }
}

impl<Tz: TimeZone> Display for RangeDisplay<'_, Tz>
where
    Tz::Offset: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_bound(f, self.range.begin())?;
        f.write_str(" - ")?;
        match (self.range.end(), self.open_end) {
            (RangeEnd::Finite(end), _) => self.write_bound(f, end),
            (RangeEnd::Unbounded, OpenEndStyle::MaxInstant) => {
                self.write_instant(f, DateTime::<Utc>::MAX_UTC)
            }
            (RangeEnd::Unbounded, OpenEndStyle::Marker(marker)) => f.write_str(marker),
        }
    }
}

impl TimeRange {
    /// Lazily render this range in UTC with a chrono strftime `pattern`.
    ///
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use span_engine::{OpenEndStyle, TimeRange};
    /// let begin = Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap();
    /// let range = TimeRange::open(begin);
    /// let text = range.display("%d-%m-%Y %H:%M").open_end(OpenEndStyle::Marker("∞"));
    /// assert_eq!(text.to_string(), "16-03-2026 09:00 - ∞");
    /// ```
    ///
    /// # Panics
    /// Calling `to_string()` on the result panics if `pattern` is not a valid
    /// strftime pattern, as with chrono's `DelayedFormat`. Use
    /// [`TimeRange::format`] to get an error instead.
    pub fn display<'a>(&self, pattern: &'a str) -> RangeDisplay<'a> {
        self.display_in(&Utc, pattern)
    }

    /// Lazily render this range with both bounds converted to `timezone`.
    ///
    /// # Panics
    /// Calling `to_string()` on the result panics if `pattern` is not a valid
    /// strftime pattern. Use [`TimeRange::format_in`] to get an error instead.
    pub fn display_in<'a, Tz: TimeZone>(
        &self,
        timezone: &Tz,
        pattern: &'a str,
    ) -> RangeDisplay<'a, Tz> {
        RangeDisplay {
            range: *self,
            pattern,
            timezone: timezone.clone(),
            locale: None,
            open_end: OpenEndStyle::default(),
        }
    }

    /// Render this range in UTC with a chrono strftime `pattern`, using the
    /// default [`OpenEndStyle`].
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidPattern`] if `pattern` is not a valid
    /// strftime pattern.
    pub fn format(&self, pattern: &str) -> Result<String> {
        render(self.display(pattern))
    }

    /// Like [`TimeRange::format`], with both bounds converted to `timezone`.
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidPattern`] if `pattern` is not a valid
    /// strftime pattern.
    pub fn format_in<Tz: TimeZone>(&self, timezone: &Tz, pattern: &str) -> Result<String>
    where
        Tz::Offset: Display,
    {
        render(self.display_in(timezone, pattern))
    }

    /// Like [`TimeRange::format`], rendering month and weekday names for `locale`.
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidPattern`] if `pattern` is not a valid
    /// strftime pattern.
    pub fn format_localized(&self, pattern: &str, locale: Locale) -> Result<String> {
        render(self.display(pattern).locale(locale))
    }
}

fn render<Tz: TimeZone>(display: RangeDisplay<'_, Tz>) -> Result<String>
where
    Tz::Offset: Display,
{
    if StrftimeItems::new(display.pattern).any(|item| matches!(item, Item::Error)) {
        return Err(RangeError::InvalidPattern(display.pattern.to_string()));
    }
    let mut rendered = String::new();
    write!(rendered, "{display}")
        .map_err(|_| RangeError::InvalidPattern(display.pattern.to_string()))?;
    Ok(rendered)
}
