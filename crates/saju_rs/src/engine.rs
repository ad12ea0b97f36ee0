//! `ChartEngine`: a term index plus configuration.

use std::path::Path;

use saju_analysis::{ChartAnalysis, ChartCharacters};
use saju_pillars::{
    AnnualCycle, CycleSnapshot, DailyCycle, FourPillars, Gender, GreatLuckCycle, MonthlyCycle,
    PillarCalculator, PillarError, annual_cycles, cycles_at, daily_cycles, great_luck_cycle,
    monthly_cycles,
};
use saju_terms::{IndexBuild, RejectedRecord, SolarTermIndex, parse_term_table};
use saju_time::ChartInstant;
use tracing::info;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::report::ChartReport;

/// Read-only chart engine. Safe to share across threads once built.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    index: SolarTermIndex,
    config: ChartConfig,
    rejected: Vec<RejectedRecord>,
}

impl ChartEngine {
    pub fn new(index: SolarTermIndex, config: ChartConfig) -> Self {
        Self {
            index,
            config,
            rejected: Vec::new(),
        }
    }

    /// Build from a `year,term,instant` table.
    pub fn from_term_table(text: &str, config: ChartConfig) -> Self {
        let IndexBuild { index, rejected } = SolarTermIndex::build(parse_term_table(text));
        info!(
            years = index.years().len(),
            terms = index.len(),
            rejected = rejected.len(),
            "term index built"
        );
        Self {
            index,
            config,
            rejected,
        }
    }

    pub fn load(path: impl AsRef<Path>, config: ChartConfig) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_term_table(&text, config))
    }

    pub fn index(&self) -> &SolarTermIndex {
        &self.index
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Records skipped while building the index.
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    fn calculator(&self) -> PillarCalculator<'_> {
        PillarCalculator::new(&self.index, self.config.pillars)
    }

    pub fn four_pillars(&self, birth: &ChartInstant) -> FourPillars {
        self.calculator().four_pillars(birth)
    }

    /// Full report. Never fails as a whole; see [`ChartReport`].
    pub fn chart(&self, birth: &ChartInstant, gender: Gender) -> ChartReport {
        let four = self.four_pillars(birth);
        let luck = self.luck_from(&four, birth, gender);
        let analysis = four.complete().map(|pillars| {
            let chart = ChartCharacters::from_cycle(pillars.map(|p| p.index));
            ChartAnalysis::of(&chart, &self.config.analysis)
        });
        ChartReport {
            birth: *birth,
            gender,
            chart_year: four.chart_year.map(|cy| cy.year),
            year: four.year,
            month: four.month,
            day: four.day,
            hour: four.hour,
            month_term: four.month_term,
            luck,
            analysis,
            warnings: four.warnings,
        }
    }

    /// Parse `birth` and build the report.
    pub fn chart_from_text(&self, birth: &str, gender: Gender) -> Result<ChartReport, ChartError> {
        let birth = ChartInstant::parse(birth)?;
        Ok(self.chart(&birth, gender))
    }

    pub fn great_luck(
        &self,
        birth: &ChartInstant,
        gender: Gender,
    ) -> Result<GreatLuckCycle, PillarError> {
        let four = self.four_pillars(birth);
        self.luck_from(&four, birth, gender)
    }

    fn luck_from(
        &self,
        four: &FourPillars,
        birth: &ChartInstant,
        gender: Gender,
    ) -> Result<GreatLuckCycle, PillarError> {
        let year = four.year.clone()?;
        let month = four.month.clone()?;
        great_luck_cycle(
            &self.index,
            birth,
            &year,
            &month,
            gender,
            &self.config.luck,
        )
    }

    pub fn annual(&self, from_year: i32, count: u32) -> Vec<AnnualCycle> {
        annual_cycles(from_year, count)
    }

    pub fn monthly(&self, chart_year: i32) -> Result<Vec<MonthlyCycle>, PillarError> {
        monthly_cycles(&self.index, chart_year)
    }

    pub fn daily(&self, year: i32, month: u32) -> Result<Vec<DailyCycle>, PillarError> {
        daily_cycles(year, month)
    }

    pub fn cycles_at(&self, target: &ChartInstant) -> CycleSnapshot {
        cycles_at(&self.index, target, self.config.pillars)
    }
}

/// Analyze a chart given directly as characters, e.g. `"甲辰 己巳 甲申 辛未"`.
pub fn analyze_characters(text: &str, config: &ChartConfig) -> Result<ChartAnalysis, ChartError> {
    let chart = ChartCharacters::parse(text)?;
    Ok(ChartAnalysis::of(&chart, &config.analysis))
}
