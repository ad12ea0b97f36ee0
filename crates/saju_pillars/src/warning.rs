//! Recoverable degradations reported alongside chart results.

use std::fmt::{Display, Formatter};

use saju_terms::SolarTerm;
use serde::Serialize;

/// A non-fatal condition that changed how a pillar was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum ChartWarning {
    /// Spring onset missing for `year`; the calendar year was used as chart year.
    SpringOnsetFallback { year: i32 },
    /// The governing month term belongs to a different chart year than the birth.
    MonthTermChartYear {
        term: SolarTerm,
        term_chart_year: i32,
        chart_year: i32,
    },
}

impl Display for ChartWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpringOnsetFallback { year } => {
                write!(f, "spring onset for {year} unavailable; calendar year used")
            }
            Self::MonthTermChartYear {
                term,
                term_chart_year,
                chart_year,
            } => write!(
                f,
                "month term {term} belongs to chart year {term_chart_year}, birth chart year is {chart_year}"
            ),
        }
    }
}
