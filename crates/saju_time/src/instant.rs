//! Validated calendar instant with clock time.
//!
//! `ChartInstant` is the canonical instant used by every chart computation:
//! a proleptic Gregorian date plus wall-clock time at second resolution.
//! Any lunar-to-solar or time-zone conversion happens before a value of
//! this type is constructed.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{
    MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, calendar_to_jdn, days_in_month, jdn_to_calendar,
};

/// Accepted date-time layouts, tried in order.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Accepted date-only layouts (interpreted as midnight).
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Calendar date and clock time. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ChartInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl ChartInstant {
    /// Build a validated instant.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::YearOutOfRange(year));
        }
        match days_in_month(year, month) {
            Some(max_day) if (1..=max_day).contains(&day) => {}
            _ => return Err(TimeError::InvalidDate { year, month, day }),
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Midnight at the start of a calendar date.
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Instant at the start of a Julian Day Number's calendar date.
    pub fn from_jdn(jdn: i64) -> Result<Self, TimeError> {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self::from_date(year, month, day)
    }

    /// Parse an instant from text.
    ///
    /// Accepts `YYYY-MM-DD HH:MM[:SS]`, `YYYY/MM/DD HH:MM[:SS]`, the ISO
    /// `T`-separated form, or a bare date (midnight).
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let trimmed = text.trim();
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Self::try_from(dt);
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
                return Self::from_date(date.year(), date.month(), date.day());
            }
        }
        Err(TimeError::Parse(trimmed.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Julian Day Number of the calendar date (time of day ignored).
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Minutes elapsed since local midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Seconds elapsed since local midnight.
    pub fn second_of_day(&self) -> u32 {
        self.minute_of_day() * 60 + self.second
    }

    /// Continuous day count: JDN plus the elapsed fraction of the day.
    pub fn day_number(&self) -> f64 {
        self.jdn() as f64 + self.second_of_day() as f64 / SECONDS_PER_DAY as f64
    }

    /// Signed fractional days from `self` to `other` (positive if `other` is later).
    pub fn days_until(&self, other: &ChartInstant) -> f64 {
        let whole = (other.jdn() - self.jdn()) as f64;
        let secs = other.second_of_day() as f64 - self.second_of_day() as f64;
        whole + secs / SECONDS_PER_DAY as f64
    }

    /// Same clock time shifted by whole days.
    pub fn add_days(&self, days: i64) -> Result<Self, TimeError> {
        let (year, month, day) = jdn_to_calendar(self.jdn() + days);
        Self::new(year, month, day, self.hour, self.minute, self.second)
    }

    /// Same calendar date at midnight.
    pub fn start_of_day(&self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            ..*self
        }
    }
}

impl TryFrom<NaiveDateTime> for ChartInstant {
    type Error = TimeError;

    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }
}

impl FromStr for ChartInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ChartInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
