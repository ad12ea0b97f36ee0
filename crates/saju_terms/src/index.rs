//! In-memory solar-term index keyed by calendar year.
//!
//! The index is built once from term records and never mutated by chart
//! computations. Every query that needs a calendar year's month-boundary
//! terms requires all 12 of them; a partial year is reported as
//! [`TermError::InsufficientTermData`] instead of being searched.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use saju_tables::Branch;
use saju_time::ChartInstant;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::TermError;
use crate::record::{RawTermRecord, RejectedRecord, SolarTermRecord};
use crate::solar_term::{CLOSING_TERMS, MONTH_BOUNDARY_TERMS, SolarTerm};

/// Search direction along the term sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
        }
    }

    /// +1 for forward, -1 for reverse.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// A located term: which term, the calendar year it is filed under, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermEvent {
    pub term: SolarTerm,
    pub year: i32,
    pub instant: ChartInstant,
}

impl TermEvent {
    /// Chart year this term belongs to. 소한 falls in January, before that
    /// calendar year's spring onset, so it closes the previous chart year.
    pub fn chart_year(&self) -> i32 {
        if self.term == SolarTerm::Sohan {
            self.year - 1
        } else {
            self.year
        }
    }

    /// Month branch opened by this term (boundary terms only).
    pub fn month_branch(&self) -> Option<Branch> {
        self.term.month_branch()
    }
}

/// Result of building an index from raw records.
#[derive(Debug, Clone, Default)]
pub struct IndexBuild {
    pub index: SolarTermIndex,
    pub rejected: Vec<RejectedRecord>,
}

/// Calendar year → term → instant.
#[derive(Debug, Clone, Default)]
pub struct SolarTermIndex {
    years: BTreeMap<i32, BTreeMap<SolarTerm, ChartInstant>>,
}

impl SolarTermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already validated records.
    pub fn from_records(records: impl IntoIterator<Item = SolarTermRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Build from raw records, collecting the ones that fail validation.
    ///
    /// A later record for the same (year, term) replaces an earlier one.
    pub fn build(records: impl IntoIterator<Item = RawTermRecord>) -> IndexBuild {
        let mut index = Self::new();
        let mut rejected = Vec::new();
        for (ordinal, raw) in records.into_iter().enumerate() {
            match raw.resolve() {
                Ok(record) => {
                    index.insert(record);
                }
                Err(reason) => {
                    debug!(ordinal, %reason, "rejected solar-term record");
                    rejected.push(RejectedRecord {
                        ordinal,
                        record: raw,
                        reason,
                    });
                }
            }
        }
        if !rejected.is_empty() {
            warn!(
                rejected = rejected.len(),
                accepted = index.len(),
                "solar-term records skipped during index build"
            );
        }
        for year in index.years() {
            let missing = index.missing_boundaries(year);
            if !missing.is_empty() {
                debug!(year, missing = missing.len(), "incomplete term year");
            }
        }
        IndexBuild { index, rejected }
    }

    /// Insert one record, returning the instant it replaced.
    pub fn insert(&mut self, record: SolarTermRecord) -> Option<ChartInstant> {
        let previous = self
            .years
            .entry(record.year)
            .or_default()
            .insert(record.term, record.instant);
        if let Some(old) = previous {
            debug!(
                year = record.year,
                term = record.term.hangul(),
                %old,
                new = %record.instant,
                "duplicate term record replaced"
            );
        }
        previous
    }

    /// Total number of stored (year, term) entries.
    pub fn len(&self) -> usize {
        self.years.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Calendar years with at least one record, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    pub fn term_instant(&self, year: i32, term: SolarTerm) -> Option<ChartInstant> {
        self.years.get(&year)?.get(&term).copied()
    }

    /// 입춘 of a calendar year.
    pub fn spring_onset(&self, year: i32) -> Option<ChartInstant> {
        self.term_instant(year, SolarTerm::Ipchun)
    }

    /// Month-boundary terms absent for a year, in chart-month order.
    pub fn missing_boundaries(&self, year: i32) -> Vec<SolarTerm> {
        MONTH_BOUNDARY_TERMS
            .iter()
            .copied()
            .filter(|t| self.term_instant(year, *t).is_none())
            .collect()
    }

    pub fn has_complete_year(&self, year: i32) -> bool {
        self.missing_boundaries(year).is_empty()
    }

    /// All 12 boundary terms of a calendar year in chronological order.
    pub fn boundary_events(&self, year: i32) -> Result<Vec<TermEvent>, TermError> {
        let terms = self
            .years
            .get(&year)
            .ok_or(TermError::InsufficientTermData { year })?;
        let mut events = Vec::with_capacity(MONTH_BOUNDARY_TERMS.len());
        for term in MONTH_BOUNDARY_TERMS {
            let instant = terms
                .get(&term)
                .copied()
                .ok_or(TermError::InsufficientTermData { year })?;
            events.push(TermEvent {
                term,
                year,
                instant,
            });
        }
        events.sort_by_key(|e| e.instant);
        Ok(events)
    }

    /// Whatever boundary terms exist across a range of years, chronologically.
    /// Incomplete years contribute what they have.
    pub fn boundary_events_in(&self, years: RangeInclusive<i32>) -> Vec<TermEvent> {
        let mut events: Vec<TermEvent> = self
            .years
            .range(years)
            .flat_map(|(year, terms)| {
                terms
                    .iter()
                    .filter(|(term, _)| term.is_month_boundary())
                    .map(|(term, instant)| TermEvent {
                        term: *term,
                        year: *year,
                        instant: *instant,
                    })
            })
            .collect();
        events.sort_by_key(|e| e.instant);
        events
    }

    /// The most recent month-boundary term at or before `instant`.
    ///
    /// Searches the instant's calendar year first, then the closing terms
    /// (대설, 소한) of the previous calendar year.
    pub fn governing_term(&self, instant: &ChartInstant) -> Result<TermEvent, TermError> {
        let year = instant.year();
        let current = self.boundary_events(year)?;
        if let Some(event) = latest_at_or_before(current.iter(), instant) {
            return Ok(event);
        }
        let previous = self.boundary_events(year - 1)?;
        let closing = previous.iter().filter(|e| CLOSING_TERMS.contains(&e.term));
        latest_at_or_before(closing, instant).ok_or_else(|| TermError::UnresolvableGoverningTerm {
            instant: instant.to_string(),
        })
    }

    /// The boundary term after `event` (Forward) or `event` itself (Reverse).
    pub fn adjacent_term(
        &self,
        event: &TermEvent,
        direction: Direction,
    ) -> Result<TermEvent, TermError> {
        if direction == Direction::Reverse {
            return Ok(*event);
        }
        let (year, term) = next_boundary_slot(event.year, event.term);
        let instant = self
            .term_instant(year, term)
            .ok_or(TermError::InsufficientTermData { year })?;
        Ok(TermEvent {
            term,
            year,
            instant,
        })
    }
}

fn latest_at_or_before<'a>(
    events: impl Iterator<Item = &'a TermEvent>,
    instant: &ChartInstant,
) -> Option<TermEvent> {
    events
        .filter(|e| e.instant <= *instant)
        .max_by_key(|e| e.instant)
        .copied()
}

/// Calendar slot of the boundary term that follows `term` filed under `year`.
fn next_boundary_slot(year: i32, term: SolarTerm) -> (i32, SolarTerm) {
    match term {
        SolarTerm::Daeseol | SolarTerm::Dongji => (year + 1, SolarTerm::Sohan),
        SolarTerm::Sohan | SolarTerm::Daehan => (year, SolarTerm::Ipchun),
        other => (year, MONTH_BOUNDARY_TERMS[other.index() as usize / 2 + 1]),
    }
}
