//! Error types for calendar validation and instant parsing.

use thiserror::Error;

/// Errors from calendar validation or instant parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported proleptic Gregorian range.
    #[error("year {0} outside supported range")]
    YearOutOfRange(i32),
    /// Month/day combination does not exist (e.g. Feb 30).
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Clock time outside 00:00:00..=23:59:59.
    #[error("invalid clock time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// Text did not match any accepted instant format.
    #[error("unparsable instant: {0}")]
    Parse(String),
}
