//! Error types for solar-term lookups and record ingestion.

use serde::Serialize;
use thiserror::Error;

/// Errors from solar-term index queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TermError {
    /// A required calendar year is absent or lacks month-boundary terms.
    #[error("insufficient solar-term data for year {year}")]
    InsufficientTermData { year: i32 },
    /// Both years were present but no boundary term precedes the instant.
    #[error("no month-boundary term at or before {instant}")]
    UnresolvableGoverningTerm { instant: String },
}

/// Why a raw term record was skipped during index construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[non_exhaustive]
pub enum RejectReason {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid year `{0}`")]
    InvalidYear(String),
    #[error("unknown term name `{0}`")]
    UnknownTerm(String),
    /// No date-time could be extracted, or the extracted one is not a real date.
    #[error("invalid instant `{0}`")]
    InvalidInstant(String),
}
