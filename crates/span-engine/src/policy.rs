//! Trailing-sample policies for the series factories.

/// What a series factory does when the series ends while a range is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingPolicy {
    /// Emit the pending range with an unbounded end.
    #[default]
    Open,
    /// Discard the pending range.
    Drop,
}
