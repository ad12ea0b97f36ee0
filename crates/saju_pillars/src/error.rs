//! Error types for pillar and luck-cycle derivation.

use saju_tables::TableError;
use saju_terms::{Direction, TermError};
use saju_time::TimeError;
use thiserror::Error;

/// Errors from pillar, luck-cycle or secondary-cycle computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PillarError {
    /// Term data missing or no governing term could be resolved.
    #[error(transparent)]
    Term(#[from] TermError),
    /// Calendar date or clock time failed validation.
    #[error("invalid date-time: {0}")]
    InvalidDateTime(#[from] TimeError),
    #[error(transparent)]
    Table(#[from] TableError),
    /// No month-boundary term lies in the required direction from the birth.
    #[error("no {direction:?} month-boundary term from {instant}")]
    NoTargetTerm { direction: Direction, instant: String },
    /// Luck settings that cannot yield a start age.
    #[error("invalid luck configuration: {0}")]
    InvalidLuckConfig(&'static str),
    /// Minute of day outside 0..1440; unreachable for validated instants.
    #[error("clock minute {0} maps to no hour window")]
    UnmappedClock(u32),
}
