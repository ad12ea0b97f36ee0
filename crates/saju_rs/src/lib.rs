//! Convenience wrapper for the saju Four Pillars engine.
//!
//! Builds a [`ChartEngine`] from a solar-term table once and produces full
//! [`ChartReport`]s: four pillars, Great Luck cycle and analysis, each
//! carrying its own error so partial charts stay usable.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let engine = ChartEngine::load("data/solar_terms_2023_2025.csv", ChartConfig::default())?;
//! let birth: ChartInstant = "2024-05-20 14:30".parse()?;
//! let report = engine.chart(&birth, Gender::Female);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod config;
pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;
pub mod report;

pub use config::ChartConfig;
pub use convenience::{annual, chart, cycles_at, daily, day_pillar, great_luck, monthly};
pub use engine::{ChartEngine, analyze_characters};
pub use error::ChartError;
pub use global::{init, is_initialized};
pub use report::{ChartReport, serialize_outcome};

// Re-export the types callers need so they can depend on this crate alone.
pub use saju_analysis::{
    AnalysisConfig, BodyStrength, ChartAnalysis, ChartCharacters, ElementAdvice, Interaction,
    InteractionKind, Marker, MarkerKind, Position, StructuralPattern,
};
pub use saju_pillars::{
    AnnualCycle, ChartWarning, CycleSnapshot, DailyCycle, Gender, GreatLuckCycle, GreatLuckEntry,
    LuckConfig, MonthlyCycle, Pillar, PillarConfig, PillarError, PillarRole, RatHourConvention,
    active_luck_entry,
};
pub use saju_tables::{Branch, CycleIndex, Element, Stem, TenRelation};
pub use saju_terms::{Direction, RejectedRecord, SolarTerm, SolarTermIndex, TermError, TermEvent};
pub use saju_time::ChartInstant;
