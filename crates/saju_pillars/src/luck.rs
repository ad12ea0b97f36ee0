//! Great Luck (대운) cycles.
//!
//! The cycle runs forward or backward through the 60-cycle from the month
//! pillar. Its start age is the day distance from birth to the nearest
//! month-boundary term in the cycle's direction, at three days per year.

use saju_tables::{CycleIndex, Polarity, Stem};
use saju_terms::{Direction, SolarTermIndex, TermError, TermEvent};
use saju_time::ChartInstant;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LuckConfig;
use crate::error::PillarError;
use crate::pillar::Pillar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// One luck pillar and the age at which it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GreatLuckEntry {
    /// 1-based position in the sequence.
    pub step: u8,
    pub start_age: u32,
    pub pillar: CycleIndex,
}

/// A full Great Luck sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreatLuckCycle {
    pub direction: Direction,
    pub start_age: u32,
    /// Term the start age was measured to.
    pub target: TermEvent,
    /// Absolute distance between birth and target, in days.
    pub days_to_target: f64,
    pub step_years: u32,
    pub entries: Vec<GreatLuckEntry>,
}

/// Forward for yang-year males and yin-year females, otherwise reverse.
pub fn luck_direction(year_stem: Stem, gender: Gender) -> Direction {
    match (year_stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => Direction::Forward,
        _ => Direction::Reverse,
    }
}

/// Start age from a day distance: rounded, never below 1.
pub fn start_age_from_days(days: f64, days_per_year: f64) -> u32 {
    let age = (days.abs() / days_per_year).round();
    // `as` saturates at u32::MAX; NaN comes only from a zero distance over
    // a zero divisor.
    if age.is_nan() || age < 1.0 { 1 } else { age as u32 }
}

/// Nearest month-boundary term strictly after `birth` (Forward) or at or
/// before it (Reverse).
///
/// Searches the birth's calendar year, then the next (Forward) or previous
/// (Reverse) one. Every year searched must carry all 12 boundary terms, so
/// a gap in the table is an error rather than a farther target.
pub fn luck_target(
    index: &SolarTermIndex,
    birth: &ChartInstant,
    direction: Direction,
) -> Result<TermEvent, PillarError> {
    let year = birth.year();
    let current = index.boundary_events(year)?;
    let found = match direction {
        Direction::Forward => current.iter().find(|e| e.instant > *birth),
        Direction::Reverse => current.iter().rev().find(|e| e.instant <= *birth),
    };
    if let Some(event) = found {
        return Ok(*event);
    }

    let neighbour = index.boundary_events(year + direction.sign() as i32)?;
    let target = match direction {
        Direction::Forward => neighbour.first(),
        Direction::Reverse => neighbour.last(),
    };
    target.copied().ok_or_else(|| PillarError::NoTargetTerm {
        direction,
        instant: birth.to_string(),
    })
}

/// Compute the Great Luck cycle from the natal year and month pillars.
pub fn great_luck_cycle(
    index: &SolarTermIndex,
    birth: &ChartInstant,
    year_pillar: &Pillar,
    month_pillar: &Pillar,
    gender: Gender,
    config: &LuckConfig,
) -> Result<GreatLuckCycle, PillarError> {
    config.validate()?;
    let direction = luck_direction(year_pillar.stem(), gender);
    let target = luck_target(index, birth, direction)?;
    let days_to_target = birth.days_until(&target.instant).abs();
    let start_age = start_age_from_days(days_to_target, config.days_per_year);
    debug!(
        direction = direction.name(),
        target = target.term.hangul(),
        days_to_target,
        start_age,
        "great luck cycle"
    );

    let entries = (1..=config.cycle_count)
        .map(|step| GreatLuckEntry {
            step,
            start_age: start_age
                .saturating_add(config.step_years.saturating_mul(u32::from(step - 1))),
            pillar: month_pillar.index.offset(direction.sign() * step as i64),
        })
        .collect();

    Ok(GreatLuckCycle {
        direction,
        start_age,
        target,
        days_to_target,
        step_years: config.step_years,
        entries,
    })
}

/// The luck entry covering `age`, if it falls inside the sequence.
pub fn active_luck_entry(cycle: &GreatLuckCycle, age: u32) -> Option<&GreatLuckEntry> {
    let end = cycle
        .entries
        .last()
        .map(|e| e.start_age.saturating_add(cycle.step_years))?;
    if age >= end {
        return None;
    }
    cycle.entries.iter().rev().find(|e| e.start_age <= age)
}
