//! Solar-term boundary index for Four Pillars charts.
//!
//! This crate provides:
//! - The 24 solar terms and the 12 month-boundary terms among them
//! - Validation of externally supplied term records, with a rejection ledger
//! - `SolarTermIndex`: governing-term and adjacent-term lookups across
//!   calendar-year boundaries
//!
//! The index consumes precomputed term instants; it never computes them.

pub mod error;
pub mod index;
pub mod record;
pub mod solar_term;

pub use error::{RejectReason, TermError};
pub use index::{Direction, IndexBuild, SolarTermIndex, TermEvent};
pub use record::{
    RawTermRecord, RejectedRecord, SolarTermRecord, extract_instant, parse_term_table,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, CLOSING_TERMS, MONTH_BOUNDARY_TERMS, MONTH_BRANCHES, SolarTerm,
};
