//! Error types for symbol lookup.

use thiserror::Error;

/// Errors from resolving chart characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TableError {
    /// A stem or branch symbol outside the fixed 10/12 vocabularies.
    #[error("invalid chart character: {0:?}")]
    InvalidChartCharacter(String),
    /// A stem/branch pair whose parities differ never occurs in the 60-cycle.
    #[error("{stem} and {branch} do not form a sexagenary pair")]
    InvalidPair { stem: &'static str, branch: &'static str },
}
