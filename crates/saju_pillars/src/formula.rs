//! Sexagenary reckoning rules shared by natal and secondary pillars.

use saju_tables::{Branch, CycleIndex, Stem, TableError};

use crate::error::PillarError;

/// Cycle offset such that `(jdn + DAY_CYCLE_OFFSET) mod 60` is the day index.
/// JDN 2451545 (2000-01-01) is 戊午, index 54.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// Chart year 4 CE is 甲子.
pub const YEAR_CYCLE_EPOCH: i64 = 4;

/// Minute of day at which the 子 window opens (23:30).
pub const RAT_WINDOW_START: u32 = 23 * 60 + 30;

/// Minute of day at which the 丑 window opens (01:30).
pub const OX_WINDOW_START: u32 = 90;

const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn year_index(chart_year: i32) -> CycleIndex {
    CycleIndex::wrapping(chart_year as i64 - YEAR_CYCLE_EPOCH)
}

pub fn day_index(jdn: i64) -> CycleIndex {
    CycleIndex::wrapping(jdn + DAY_CYCLE_OFFSET)
}

/// Zero-based position of a month branch counted from 寅.
pub const fn month_position(branch: Branch) -> u8 {
    (branch.index() + 10) % 12
}

/// Five-tiger rule: the year stem fixes the stem of the 寅 month.
pub fn month_index(year_stem: Stem, month_branch: Branch) -> Result<CycleIndex, TableError> {
    let first = (year_stem.index() % 5) * 2 + 2;
    let stem = Stem::from_index(first + month_position(month_branch));
    CycleIndex::try_from_pair(stem, month_branch)
}

/// Hour branch for a minute of day. 子 spans 23:30 through 01:29 and every
/// other window is two hours wide.
pub fn hour_branch(minute_of_day: u32) -> Result<Branch, PillarError> {
    if minute_of_day >= MINUTES_PER_DAY {
        return Err(PillarError::UnmappedClock(minute_of_day));
    }
    if minute_of_day >= RAT_WINDOW_START || minute_of_day < OX_WINDOW_START {
        return Ok(Branch::Ja);
    }
    let window = (minute_of_day - OX_WINDOW_START) / 120 + 1;
    Ok(Branch::from_index(window as u8))
}

/// Five-rat rule: the day stem fixes the stem of the 子 hour.
pub fn hour_index(day_stem: Stem, hour_branch: Branch) -> Result<CycleIndex, TableError> {
    let first = (day_stem.index() % 5) * 2;
    let stem = Stem::from_index(first + hour_branch.index());
    CycleIndex::try_from_pair(stem, hour_branch)
}
