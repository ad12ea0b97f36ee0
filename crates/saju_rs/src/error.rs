//! Unified error type for the convenience API.

use saju_pillars::PillarError;
use saju_tables::TableError;
use saju_terms::TermError;
use saju_time::TimeError;
use thiserror::Error;

/// Errors from the convenience API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// `init()` has not been called.
    #[error("chart engine not initialized; call saju_rs::init() first")]
    NotInitialized,
    /// `init()` was called more than once.
    #[error("chart engine already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Pillar(#[from] PillarError),
    #[error(transparent)]
    Term(#[from] TermError),
    #[error(transparent)]
    InvalidChartCharacter(#[from] TableError),
    #[error("invalid date-time: {0}")]
    InvalidDateTime(#[from] TimeError),
    /// A term table or configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
