//! Full chart report with per-component results.

use saju_analysis::ChartAnalysis;
use saju_pillars::{ChartWarning, Gender, GreatLuckCycle, Pillar, PillarError, PillarRole};
use saju_terms::TermEvent;
use saju_time::ChartInstant;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Everything known about one birth. Components that failed carry their
/// error; the rest are still usable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub birth: ChartInstant,
    pub gender: Gender,
    pub chart_year: Option<i32>,
    #[serde(serialize_with = "serialize_outcome")]
    pub year: Result<Pillar, PillarError>,
    #[serde(serialize_with = "serialize_outcome")]
    pub month: Result<Pillar, PillarError>,
    #[serde(serialize_with = "serialize_outcome")]
    pub day: Result<Pillar, PillarError>,
    #[serde(serialize_with = "serialize_outcome")]
    pub hour: Result<Pillar, PillarError>,
    pub month_term: Option<TermEvent>,
    #[serde(serialize_with = "serialize_outcome")]
    pub luck: Result<GreatLuckCycle, PillarError>,
    /// Present only when all four pillars resolved.
    pub analysis: Option<ChartAnalysis>,
    pub warnings: Vec<ChartWarning>,
}

impl ChartReport {
    pub fn pillar(&self, role: PillarRole) -> &Result<Pillar, PillarError> {
        match role {
            PillarRole::Year => &self.year,
            PillarRole::Month => &self.month,
            PillarRole::Day => &self.day,
            PillarRole::Hour => &self.hour,
        }
    }

    /// Whether every pillar, the luck cycle and the analysis are present.
    pub fn is_complete(&self) -> bool {
        self.year.is_ok()
            && self.month.is_ok()
            && self.day.is_ok()
            && self.hour.is_ok()
            && self.luck.is_ok()
            && self.analysis.is_some()
    }

    /// Errors of the failed components, by name.
    pub fn failures(&self) -> Vec<(&'static str, &PillarError)> {
        let mut out = Vec::new();
        for (name, result) in [
            ("year", &self.year),
            ("month", &self.month),
            ("day", &self.day),
            ("hour", &self.hour),
        ] {
            if let Err(e) = result {
                out.push((name, e));
            }
        }
        if let Err(e) = &self.luck {
            out.push(("luck", e));
        }
        out
    }
}

/// `Ok(v)` serializes as `v`; `Err(e)` as `{"error": "<message>"}`.
pub fn serialize_outcome<T, S>(value: &Result<T, PillarError>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Ok(v) => v.serialize(serializer),
        Err(e) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("error", &e.to_string())?;
            map.end()
        }
    }
}
