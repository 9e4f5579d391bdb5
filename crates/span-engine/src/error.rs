//! Error types for span-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// An explicit `(begin, end)` pair where the end precedes the begin.
    #[error("Invalid range: end {end} precedes begin {begin}")]
    InvalidRange {
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid format pattern: {0}")]
    InvalidPattern(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, RangeError>;
