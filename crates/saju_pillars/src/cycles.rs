//! Secondary cycles: year (세운), month (월운) and day (일진) pillars
//! outside the natal chart.

use saju_tables::CycleIndex;
use saju_terms::{MONTH_BOUNDARY_TERMS, SolarTerm, SolarTermIndex, TermError, TermEvent};
use saju_time::{ChartInstant, TimeError, days_in_month};
use serde::Serialize;

use crate::calculator::PillarCalculator;
use crate::config::PillarConfig;
use crate::error::PillarError;
use crate::formula;
use crate::pillar::Pillar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualCycle {
    pub chart_year: i32,
    pub pillar: CycleIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCycle {
    /// Boundary term opening the month.
    pub term: TermEvent,
    pub pillar: CycleIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCycle {
    pub date: ChartInstant,
    pub pillar: CycleIndex,
}

/// Year, month and day pillars in force at an arbitrary instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleSnapshot {
    pub target: ChartInstant,
    pub year: Result<Pillar, PillarError>,
    pub month: Result<Pillar, PillarError>,
    pub day: Pillar,
}

/// Year pillars for `count` consecutive chart years.
pub fn annual_cycles(from_year: i32, count: u32) -> Vec<AnnualCycle> {
    (0..count as i32)
        .map(|i| AnnualCycle {
            chart_year: from_year + i,
            pillar: formula::year_index(from_year + i),
        })
        .collect()
}

/// The 12 month pillars of a chart year, 寅 month first.
///
/// 입춘 through 대설 are read from `chart_year`, 소한 from the next
/// calendar year.
pub fn monthly_cycles(
    index: &SolarTermIndex,
    chart_year: i32,
) -> Result<Vec<MonthlyCycle>, PillarError> {
    let year_stem = formula::year_index(chart_year).stem();
    MONTH_BOUNDARY_TERMS
        .iter()
        .map(|&term| -> Result<MonthlyCycle, PillarError> {
            let year = if term == SolarTerm::Sohan {
                chart_year + 1
            } else {
                chart_year
            };
            let instant = index
                .term_instant(year, term)
                .ok_or(TermError::InsufficientTermData { year })?;
            let branch = term
                .month_branch()
                .ok_or(TermError::InsufficientTermData { year })?;
            Ok(MonthlyCycle {
                term: TermEvent {
                    term,
                    year,
                    instant,
                },
                pillar: formula::month_index(year_stem, branch)?,
            })
        })
        .collect()
}

/// Day pillars for every date of a calendar month.
pub fn daily_cycles(year: i32, month: u32) -> Result<Vec<DailyCycle>, PillarError> {
    let days = days_in_month(year, month).ok_or(TimeError::InvalidDate {
        year,
        month,
        day: 1,
    })?;
    (1..=days)
        .map(|day| -> Result<DailyCycle, PillarError> {
            let date = ChartInstant::from_date(year, month, day)?;
            Ok(DailyCycle {
                date,
                pillar: formula::day_index(date.jdn()),
            })
        })
        .collect()
}

/// Year, month and day pillars at `target`.
pub fn cycles_at(
    index: &SolarTermIndex,
    target: &ChartInstant,
    config: PillarConfig,
) -> CycleSnapshot {
    let calc = PillarCalculator::new(index, config);
    CycleSnapshot {
        target: *target,
        year: calc.year_pillar(target),
        month: calc.month_pillar(target),
        day: calc.day_pillar(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_terms::SolarTermRecord;

    #[test]
    fn annual_sequence() {
        let years = annual_cycles(2023, 3);
        let names: Vec<String> = years.iter().map(|y| y.pillar.hanja()).collect();
        assert_eq!(names, ["癸卯", "甲辰", "乙巳"]);
    }

    #[test]
    fn daily_month() {
        let days = daily_cycles(2000, 2).unwrap();
        assert_eq!(days.len(), 29);
        // 2000-01-01 is 戊午; February 1 is 31 days later.
        assert_eq!(days[0].pillar, CycleIndex::wrapping(54 + 31));
        assert!(daily_cycles(2000, 13).is_err());
    }

    #[test]
    fn monthly_needs_next_year_sohan() {
        let records: Vec<SolarTermRecord> = MONTH_BOUNDARY_TERMS
            .iter()
            .enumerate()
            .map(|(i, &term)| SolarTermRecord {
                term,
                year: 2024,
                instant: ChartInstant::from_date(2024, (i as u32 % 12) + 1, 5).unwrap(),
            })
            .collect();
        let index = SolarTermIndex::from_records(records);
        assert_eq!(
            monthly_cycles(&index, 2024),
            Err(PillarError::Term(TermError::InsufficientTermData { year: 2025 }))
        );
    }
}
