//! One-call analysis over the eight chart characters.

use serde::Serialize;

use crate::chart::ChartCharacters;
use crate::config::AnalysisConfig;
use crate::favorable::{ElementAdvice, favorable_elements};
use crate::interaction::{InteractionReport, analyze_interactions};
use crate::markers::{Marker, find_markers};
use crate::pattern::{BodyStrengthReport, StructuralPattern, body_strength, classify_pattern};
use crate::strength::{StrengthScores, strength_scores};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub scores: StrengthScores,
    pub body_strength: BodyStrengthReport,
    pub pattern: StructuralPattern,
    pub advice: ElementAdvice,
    pub interactions: InteractionReport,
    pub markers: Vec<Marker>,
}

impl ChartAnalysis {
    pub fn of(chart: &ChartCharacters, config: &AnalysisConfig) -> Self {
        let scores = strength_scores(chart);
        let body_strength = body_strength(&scores);
        let pattern = classify_pattern(chart, &scores, config);
        let advice = favorable_elements(chart.day_stem().element(), body_strength.label);
        tracing::debug!(
            chart = %chart,
            strength = body_strength.label.name(),
            pattern = %pattern.label(),
            "chart analyzed"
        );
        Self {
            scores,
            body_strength,
            pattern,
            advice,
            interactions: analyze_interactions(chart),
            markers: find_markers(chart),
        }
    }
}
