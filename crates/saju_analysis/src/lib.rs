//! Analysis of a Four Pillars chart from its eight characters.
//!
//! This crate provides:
//! - Weighted element and Ten-Relation scores
//! - Body-strength and structural-pattern classification
//! - Favorable/unfavorable element advice
//! - Combination, clash, punishment, harm and break detection
//! - Symbolic-star markers
//!
//! Every function is pure over a validated [`ChartCharacters`].

pub mod analysis;
pub mod chart;
pub mod config;
pub mod favorable;
pub mod interaction;
pub mod markers;
pub mod pattern;
pub mod strength;

pub use analysis::ChartAnalysis;
pub use chart::{ALL_POSITIONS, BRANCH_POSITIONS, ChartCharacters, Position, STEM_POSITIONS};
pub use config::AnalysisConfig;
pub use favorable::{ElementAdvice, favorable_elements};
pub use interaction::{Interaction, InteractionKind, InteractionReport, analyze_interactions};
pub use markers::{Marker, MarkerKind, MarkerNature, find_markers};
pub use pattern::{
    BodyStrength, BodyStrengthReport, StructuralPattern, body_strength, classify_pattern,
    prevailing_pattern,
};
pub use strength::{
    POSITION_WEIGHTS, StrengthScores, position_weight, raw_scores, round1, strength_scores,
    total_weight,
};
