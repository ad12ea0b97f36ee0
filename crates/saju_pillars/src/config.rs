//! Configuration for pillar and luck-cycle derivation.

use serde::{Deserialize, Serialize};

use crate::error::PillarError;

/// Upper bound on `LuckConfig::step_years`.
pub const MAX_STEP_YEARS: u32 = 60;

/// How a birth in the late half of the 子 window (23:30–23:59) is dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RatHourConvention {
    /// Keep the calendar date's day pillar; the day changes at midnight.
    #[default]
    SplitAtMidnight,
    /// Use the following day's pillar from 23:30 onward.
    AdvanceDay,
}

/// Pillar derivation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarConfig {
    pub rat_hour: RatHourConvention,
    /// When the spring-onset term for a year is absent, use the calendar
    /// year as the chart year and report a warning instead of failing.
    pub spring_onset_fallback: bool,
}

impl Default for PillarConfig {
    fn default() -> Self {
        Self {
            rat_hour: RatHourConvention::SplitAtMidnight,
            spring_onset_fallback: true,
        }
    }
}

/// Great Luck cycle options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckConfig {
    /// Number of luck pillars generated.
    pub cycle_count: u8,
    /// Days between birth and target term that count as one year of age.
    pub days_per_year: f64,
    /// Years covered by each luck pillar.
    pub step_years: u32,
}

impl LuckConfig {
    /// Reject settings that would produce a meaningless start age.
    pub fn validate(&self) -> Result<(), PillarError> {
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(PillarError::InvalidLuckConfig(
                "days_per_year must be finite and positive",
            ));
        }
        if self.step_years == 0 || self.step_years > MAX_STEP_YEARS {
            return Err(PillarError::InvalidLuckConfig(
                "step_years must be between 1 and 60",
            ));
        }
        if self.cycle_count == 0 {
            return Err(PillarError::InvalidLuckConfig("cycle_count must be at least 1"));
        }
        Ok(())
    }
}

impl Default for LuckConfig {
    fn default() -> Self {
        Self {
            cycle_count: 10,
            days_per_year: 3.0,
            step_years: 10,
        }
    }
}
