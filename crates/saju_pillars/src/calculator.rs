//! Natal pillar derivation over a solar-term index.

use saju_terms::{SolarTermIndex, TermError, TermEvent};
use saju_time::ChartInstant;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{PillarConfig, RatHourConvention};
use crate::error::PillarError;
use crate::formula::{self, RAT_WINDOW_START};
use crate::pillar::{Pillar, PillarRole};
use crate::warning::ChartWarning;

/// Chart year of an instant and whether it came from the calendar-year fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartYear {
    pub year: i32,
    pub fallback: bool,
}

/// A resolved month pillar with the term that opened the month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResolution {
    pub pillar: Pillar,
    pub term: TermEvent,
    pub chart_year: ChartYear,
    pub warning: Option<ChartWarning>,
}

/// The four natal pillars, each resolved independently.
#[derive(Debug, Clone, PartialEq)]
pub struct FourPillars {
    pub year: Result<Pillar, PillarError>,
    pub month: Result<Pillar, PillarError>,
    pub day: Result<Pillar, PillarError>,
    pub hour: Result<Pillar, PillarError>,
    pub chart_year: Option<ChartYear>,
    /// Boundary term that opened the birth month, when resolved.
    pub month_term: Option<TermEvent>,
    pub warnings: Vec<ChartWarning>,
}

impl FourPillars {
    pub fn get(&self, role: PillarRole) -> &Result<Pillar, PillarError> {
        match role {
            PillarRole::Year => &self.year,
            PillarRole::Month => &self.month,
            PillarRole::Day => &self.day,
            PillarRole::Hour => &self.hour,
        }
    }

    /// All four pillars, if every one resolved.
    pub fn complete(&self) -> Option<[Pillar; 4]> {
        Some([
            *self.year.as_ref().ok()?,
            *self.month.as_ref().ok()?,
            *self.day.as_ref().ok()?,
            *self.hour.as_ref().ok()?,
        ])
    }
}

/// Day pillar of a calendar date, ignoring clock time.
pub fn calendar_day_pillar(instant: &ChartInstant) -> Pillar {
    Pillar::new(PillarRole::Day, formula::day_index(instant.jdn()))
}

/// Derives pillars for instants covered by a [`SolarTermIndex`].
#[derive(Debug, Clone, Copy)]
pub struct PillarCalculator<'a> {
    index: &'a SolarTermIndex,
    config: PillarConfig,
}

impl<'a> PillarCalculator<'a> {
    pub fn new(index: &'a SolarTermIndex, config: PillarConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &'a SolarTermIndex {
        self.index
    }

    pub fn config(&self) -> &PillarConfig {
        &self.config
    }

    /// Calendar year, less one before that year's spring onset.
    pub fn chart_year(&self, instant: &ChartInstant) -> Result<ChartYear, PillarError> {
        let year = instant.year();
        match self.index.spring_onset(year) {
            Some(onset) => Ok(ChartYear {
                year: if *instant < onset { year - 1 } else { year },
                fallback: false,
            }),
            None if self.config.spring_onset_fallback => {
                warn!(year, "spring onset missing; using calendar year as chart year");
                Ok(ChartYear {
                    year,
                    fallback: true,
                })
            }
            None => Err(TermError::InsufficientTermData { year }.into()),
        }
    }

    pub fn year_pillar(&self, instant: &ChartInstant) -> Result<Pillar, PillarError> {
        let chart_year = self.chart_year(instant)?;
        Ok(Pillar::new(
            PillarRole::Year,
            formula::year_index(chart_year.year),
        ))
    }

    /// Resolve the month pillar, preferring a governing term from the
    /// birth's own chart year.
    pub fn resolve_month(&self, instant: &ChartInstant) -> Result<MonthResolution, PillarError> {
        let chart_year = self.chart_year(instant)?;
        let governing = self.index.governing_term(instant)?;

        let (term, warning) = if governing.chart_year() == chart_year.year {
            (governing, None)
        } else {
            let y = instant.year();
            let preferred = self
                .index
                .boundary_events_in(y - 1..=y + 1)
                .into_iter()
                .filter(|e| e.instant <= *instant && e.chart_year() == chart_year.year)
                .max_by_key(|e| e.instant);
            match preferred {
                Some(event) => {
                    debug!(term = event.term.hangul(), year = event.year, "month term chosen by chart year");
                    (event, None)
                }
                None => {
                    let warning = ChartWarning::MonthTermChartYear {
                        term: governing.term,
                        term_chart_year: governing.chart_year(),
                        chart_year: chart_year.year,
                    };
                    warn!(%warning, "month term chart year mismatch");
                    (governing, Some(warning))
                }
            }
        };

        let branch = term
            .month_branch()
            .ok_or_else(|| TermError::UnresolvableGoverningTerm {
                instant: instant.to_string(),
            })?;
        let year_stem = formula::year_index(chart_year.year).stem();
        let index = formula::month_index(year_stem, branch)?;
        Ok(MonthResolution {
            pillar: Pillar::new(PillarRole::Month, index),
            term,
            chart_year,
            warning,
        })
    }

    pub fn month_pillar(&self, instant: &ChartInstant) -> Result<Pillar, PillarError> {
        self.resolve_month(instant).map(|m| m.pillar)
    }

    /// Day pillar under the configured rat-hour convention.
    pub fn day_pillar(&self, instant: &ChartInstant) -> Pillar {
        let mut jdn = instant.jdn();
        if self.config.rat_hour == RatHourConvention::AdvanceDay
            && instant.minute_of_day() >= RAT_WINDOW_START
        {
            jdn += 1;
        }
        Pillar::new(PillarRole::Day, formula::day_index(jdn))
    }

    pub fn hour_pillar(&self, instant: &ChartInstant) -> Result<Pillar, PillarError> {
        let branch = formula::hour_branch(instant.minute_of_day())?;
        let day_stem = self.day_pillar(instant).stem();
        let index = formula::hour_index(day_stem, branch)?;
        Ok(Pillar::new(PillarRole::Hour, index))
    }

    /// All four pillars; a failure in one does not prevent the others.
    pub fn four_pillars(&self, instant: &ChartInstant) -> FourPillars {
        let mut warnings = Vec::new();

        let chart_year = self.chart_year(instant);
        if let Ok(cy) = &chart_year {
            if cy.fallback {
                warnings.push(ChartWarning::SpringOnsetFallback { year: cy.year });
            }
        }
        let year = chart_year
            .clone()
            .map(|cy| Pillar::new(PillarRole::Year, formula::year_index(cy.year)));

        let (month, month_term) = match self.resolve_month(instant) {
            Ok(resolution) => {
                warnings.extend(resolution.warning);
                (Ok(resolution.pillar), Some(resolution.term))
            }
            Err(e) => (Err(e), None),
        };

        FourPillars {
            year,
            month,
            day: Ok(self.day_pillar(instant)),
            hour: self.hour_pillar(instant),
            chart_year: chart_year.ok(),
            month_term,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_terms::{MONTH_BOUNDARY_TERMS, SolarTerm, SolarTermRecord};

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> ChartInstant {
        ChartInstant::new(y, m, d, h, mi, 0).unwrap()
    }

    fn year_records(year: i32) -> Vec<SolarTermRecord> {
        let days = [
            (2, 4),
            (3, 5),
            (4, 4),
            (5, 5),
            (6, 5),
            (7, 7),
            (8, 7),
            (9, 7),
            (10, 8),
            (11, 7),
            (12, 7),
            (1, 6),
        ];
        MONTH_BOUNDARY_TERMS
            .iter()
            .zip(days)
            .map(|(term, (m, d))| SolarTermRecord {
                term: *term,
                year,
                instant: at(year, m, d, 12, 0),
            })
            .collect()
    }

    fn index() -> SolarTermIndex {
        SolarTermIndex::from_records((2023..=2025).flat_map(year_records))
    }

    #[test]
    fn chart_year_switches_at_spring_onset() {
        let idx = index();
        let calc = PillarCalculator::new(&idx, PillarConfig::default());
        assert_eq!(calc.chart_year(&at(2024, 2, 4, 11, 59)).unwrap().year, 2023);
        assert_eq!(calc.chart_year(&at(2024, 2, 4, 12, 0)).unwrap().year, 2024);
        assert_eq!(calc.year_pillar(&at(2024, 6, 1, 0, 0)).unwrap().to_string(), "甲辰");
        assert_eq!(calc.year_pillar(&at(2024, 1, 20, 0, 0)).unwrap().to_string(), "癸卯");
    }

    #[test]
    fn spring_onset_fallback_is_configurable() {
        let idx = index();
        let calc = PillarCalculator::new(&idx, PillarConfig::default());
        let cy = calc.chart_year(&at(2030, 1, 1, 0, 0)).unwrap();
        assert_eq!((cy.year, cy.fallback), (2030, true));

        let strict = PillarConfig {
            spring_onset_fallback: false,
            ..PillarConfig::default()
        };
        let calc = PillarCalculator::new(&idx, strict);
        assert_eq!(
            calc.chart_year(&at(2030, 1, 1, 0, 0)),
            Err(PillarError::Term(TermError::InsufficientTermData { year: 2030 }))
        );
    }

    #[test]
    fn month_pillars_across_year_boundary() {
        let idx = index();
        let calc = PillarCalculator::new(&idx, PillarConfig::default());
        // 甲辰 year: 寅 month is 丙寅.
        assert_eq!(calc.month_pillar(&at(2024, 2, 10, 0, 0)).unwrap().to_string(), "丙寅");
        assert_eq!(calc.month_pillar(&at(2024, 12, 20, 0, 0)).unwrap().to_string(), "丙子");
        // Early January 2025 is still the 子 month of chart year 2024.
        let m = calc.resolve_month(&at(2025, 1, 2, 0, 0)).unwrap();
        assert_eq!(m.pillar.to_string(), "丙子");
        assert_eq!(m.term.term, SolarTerm::Daeseol);
        assert_eq!(calc.month_pillar(&at(2025, 1, 20, 0, 0)).unwrap().to_string(), "丁丑");
        // 乙巳 year opens with 戊寅.
        assert_eq!(calc.month_pillar(&at(2025, 2, 10, 0, 0)).unwrap().to_string(), "戊寅");
    }

    #[test]
    fn rat_hour_conventions() {
        let idx = index();
        let late = at(2000, 1, 1, 23, 45);
        let split = PillarCalculator::new(&idx, PillarConfig::default());
        assert_eq!(split.day_pillar(&late).to_string(), "戊午");
        // 戊 day: 子 hour is 壬子.
        assert_eq!(split.hour_pillar(&late).unwrap().to_string(), "壬子");

        let advance = PillarCalculator::new(
            &idx,
            PillarConfig {
                rat_hour: RatHourConvention::AdvanceDay,
                ..PillarConfig::default()
            },
        );
        assert_eq!(advance.day_pillar(&late).to_string(), "己未");
        assert_eq!(advance.hour_pillar(&late).unwrap().to_string(), "甲子");
        assert_eq!(advance.day_pillar(&at(2000, 1, 1, 23, 29)).to_string(), "戊午");
    }

    #[test]
    fn partial_results_survive_missing_terms() {
        let idx = index();
        let calc = PillarCalculator::new(&idx, PillarConfig::default());
        let four = calc.four_pillars(&at(2000, 1, 1, 12, 0));
        assert!(four.year.is_ok());
        assert!(four.month.is_err());
        assert_eq!(four.day.as_ref().unwrap().to_string(), "戊午");
        assert!(four.hour.is_ok());
        assert_eq!(four.warnings, vec![ChartWarning::SpringOnsetFallback { year: 2000 }]);
        assert!(four.complete().is_none());
    }
}
