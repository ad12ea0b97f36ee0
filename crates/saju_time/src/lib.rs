//! Calendar instants and day-count arithmetic for chart computation.
//!
//! This crate provides:
//! - `ChartInstant`, a validated proleptic Gregorian date with clock time
//! - Julian Day Number ↔ calendar conversions (integer, exact)
//! - Instant parsing from the common `YYYY-MM-DD HH:MM` family of formats
//!
//! Everything here is calendar arithmetic only. Time zones, lunar calendars
//! and astronomical time scales are the caller's concern.

pub mod error;
pub mod instant;
pub mod julian;

pub use error::TimeError;
pub use instant::ChartInstant;
pub use julian::{
    MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, calendar_to_jdn, days_in_month, is_leap_year,
    jdn_to_calendar,
};
