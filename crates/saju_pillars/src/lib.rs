//! Four Pillars derivation over a solar-term index.
//!
//! This crate provides:
//! - `PillarCalculator`: year, month, day and hour pillars, each resolved
//!   independently so a failure in one leaves the others usable
//! - Great Luck cycles (direction, start age, pillar sequence)
//! - Secondary annual, monthly and daily cycles
//! - `PillarConfig` / `LuckConfig` options

pub mod calculator;
pub mod config;
pub mod cycles;
pub mod error;
pub mod formula;
pub mod luck;
pub mod pillar;
pub mod warning;

pub use calculator::{
    ChartYear, FourPillars, MonthResolution, PillarCalculator, calendar_day_pillar,
};
pub use config::{LuckConfig, MAX_STEP_YEARS, PillarConfig, RatHourConvention};
pub use cycles::{
    AnnualCycle, CycleSnapshot, DailyCycle, MonthlyCycle, annual_cycles, cycles_at, daily_cycles,
    monthly_cycles,
};
pub use error::PillarError;
pub use luck::{
    Gender, GreatLuckCycle, GreatLuckEntry, active_luck_entry, great_luck_cycle, luck_direction,
    luck_target, start_age_from_days,
};
pub use pillar::{ALL_PILLAR_ROLES, Pillar, PillarRole};
pub use warning::ChartWarning;
