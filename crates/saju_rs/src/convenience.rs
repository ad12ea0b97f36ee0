//! Free functions over the global engine.

use saju_pillars::{
    AnnualCycle, CycleSnapshot, DailyCycle, Gender, GreatLuckCycle, MonthlyCycle, Pillar,
    calendar_day_pillar,
};
use saju_time::ChartInstant;

use crate::error::ChartError;
use crate::global::engine;
use crate::report::ChartReport;

/// Full chart for a birth instant.
pub fn chart(birth: &ChartInstant, gender: Gender) -> Result<ChartReport, ChartError> {
    Ok(engine()?.chart(birth, gender))
}

pub fn great_luck(birth: &ChartInstant, gender: Gender) -> Result<GreatLuckCycle, ChartError> {
    Ok(engine()?.great_luck(birth, gender)?)
}

/// Year pillars for consecutive chart years; needs no term data.
pub fn annual(from_year: i32, count: u32) -> Vec<AnnualCycle> {
    saju_pillars::annual_cycles(from_year, count)
}

pub fn monthly(chart_year: i32) -> Result<Vec<MonthlyCycle>, ChartError> {
    Ok(engine()?.monthly(chart_year)?)
}

/// Day pillar of a calendar date; needs no term data.
pub fn day_pillar(date: &ChartInstant) -> Pillar {
    calendar_day_pillar(date)
}

/// Day pillars of a calendar month; needs no term data.
pub fn daily(year: i32, month: u32) -> Result<Vec<DailyCycle>, ChartError> {
    Ok(saju_pillars::daily_cycles(year, month)?)
}

pub fn cycles_at(target: &ChartInstant) -> Result<CycleSnapshot, ChartError> {
    Ok(engine()?.cycles_at(target))
}
