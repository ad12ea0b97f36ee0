//! Body strength and structural pattern (격국) classification.

use saju_tables::{
    ALL_TEN_RELATIONS, DRAINING_RELATIONS, Polarity, SUPPORTING_RELATIONS, TenRelation,
    blade_branch, dominant_hidden_stem, is_hidden_in, prosperity_branch, ten_relation,
};
use serde::Serialize;

use crate::chart::ChartCharacters;
use crate::config::AnalysisConfig;
use crate::strength::{StrengthScores, round1};

/// Strength of the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodyStrength {
    Strong,
    MildlyStrong,
    Balanced,
    MildlyWeak,
    Weak,
}

impl BodyStrength {
    /// Classify a supporting-minus-draining difference.
    pub fn from_difference(diff: f64) -> Self {
        if diff >= 1.5 {
            Self::Strong
        } else if diff >= 0.5 {
            Self::MildlyStrong
        } else if diff > -0.5 {
            Self::Balanced
        } else if diff > -1.5 {
            Self::MildlyWeak
        } else {
            Self::Weak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::MildlyStrong => "Mildly Strong",
            Self::Balanced => "Balanced",
            Self::MildlyWeak => "Mildly Weak",
            Self::Weak => "Weak",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Strong => "신강",
            Self::MildlyStrong => "약간 신강",
            Self::Balanced => "중화",
            Self::MildlyWeak => "약간 신약",
            Self::Weak => "신약",
        }
    }

    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Strong | Self::MildlyStrong)
    }

    pub const fn is_weak(self) -> bool {
        matches!(self, Self::Weak | Self::MildlyWeak)
    }
}

/// Body strength with the sums it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyStrengthReport {
    pub supporting: f64,
    pub draining: f64,
    pub difference: f64,
    pub label: BodyStrength,
}

pub fn body_strength(scores: &StrengthScores) -> BodyStrengthReport {
    let supporting: f64 = SUPPORTING_RELATIONS.iter().map(|r| scores.relation(*r)).sum();
    let draining: f64 = DRAINING_RELATIONS.iter().map(|r| scores.relation(*r)).sum();
    let difference = round1(supporting - draining);
    BodyStrengthReport {
        supporting: round1(supporting),
        draining: round1(draining),
        difference,
        label: BodyStrength::from_difference(difference),
    }
}

/// Structural pattern, tried in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructuralPattern {
    /// Month branch is the day stem's prosperity seat (건록격).
    Prosperity,
    /// Month branch is a yang day stem's blade seat (양인격).
    Blade,
    /// Month stem is hidden in the month branch.
    Revealed(TenRelation),
    /// Principal hidden stem of the month branch.
    Dominant(TenRelation),
    /// Highest-scoring relation overall.
    Prevailing(TenRelation),
    Indeterminate,
}

impl StructuralPattern {
    pub fn relation(self) -> Option<TenRelation> {
        match self {
            Self::Revealed(r) | Self::Dominant(r) | Self::Prevailing(r) => Some(r),
            Self::Prosperity | Self::Blade | Self::Indeterminate => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Prosperity => "건록격".to_string(),
            Self::Blade => "양인격".to_string(),
            Self::Revealed(r) | Self::Dominant(r) | Self::Prevailing(r) => {
                format!("{}격", r.hangul())
            }
            Self::Indeterminate => "격국 미정".to_string(),
        }
    }
}

/// Classify the chart's structural pattern.
///
/// Checks run in priority order and the first match wins: prosperity or
/// blade seat, revealed month stem, principal hidden stem of the month
/// branch, then [`prevailing_pattern`].
pub fn classify_pattern(
    chart: &ChartCharacters,
    scores: &StrengthScores,
    config: &AnalysisConfig,
) -> StructuralPattern {
    let day = chart.day_stem();
    let month_branch = chart.month_branch();

    if prosperity_branch(day) == month_branch {
        return StructuralPattern::Prosperity;
    }
    if day.polarity() == Polarity::Yang && blade_branch(day) == Some(month_branch) {
        return StructuralPattern::Blade;
    }

    let month_stem = chart.month_stem();
    if is_hidden_in(month_stem, month_branch) {
        return StructuralPattern::Revealed(ten_relation(day, month_stem));
    }

    if let Some(principal) = dominant_hidden_stem(month_branch) {
        return StructuralPattern::Dominant(ten_relation(day, principal.stem));
    }

    prevailing_pattern(scores, config)
}

/// Pattern named after the highest-scoring relation, or `Indeterminate`
/// when that score does not exceed `pattern_min_score`.
pub fn prevailing_pattern(scores: &StrengthScores, config: &AnalysisConfig) -> StructuralPattern {
    // Ties resolve to the earlier relation in the fixed order.
    let mut best: Option<(TenRelation, f64)> = None;
    for relation in ALL_TEN_RELATIONS {
        let score = scores.relation(relation);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((relation, score));
        }
    }
    match best {
        Some((relation, score)) if score > config.pattern_min_score => {
            StructuralPattern::Prevailing(relation)
        }
        _ => StructuralPattern::Indeterminate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::strength_scores;

    fn classify(text: &str) -> StructuralPattern {
        let chart = ChartCharacters::parse(text).unwrap();
        classify_pattern(&chart, &strength_scores(&chart), &AnalysisConfig::default())
    }

    #[test]
    fn thresholds() {
        assert_eq!(BodyStrength::from_difference(1.5), BodyStrength::Strong);
        assert_eq!(BodyStrength::from_difference(1.4), BodyStrength::MildlyStrong);
        assert_eq!(BodyStrength::from_difference(0.5), BodyStrength::MildlyStrong);
        assert_eq!(BodyStrength::from_difference(0.4), BodyStrength::Balanced);
        assert_eq!(BodyStrength::from_difference(-0.4), BodyStrength::Balanced);
        assert_eq!(BodyStrength::from_difference(-0.5), BodyStrength::MildlyWeak);
        assert_eq!(BodyStrength::from_difference(-1.5), BodyStrength::Weak);
    }

    #[test]
    fn all_water_chart_is_strong() {
        let chart = ChartCharacters::parse("壬子 壬子 壬子 壬子").unwrap();
        let report = body_strength(&strength_scores(&chart));
        assert_eq!(report.draining, 0.0);
        assert_eq!(report.label, BodyStrength::Strong);
    }

    #[test]
    fn prosperity_and_blade() {
        // 甲 day in 寅 month.
        assert_eq!(classify("甲子 丙寅 甲子 甲子"), StructuralPattern::Prosperity);
        // 甲 day in 卯 month.
        assert_eq!(classify("甲子 丁卯 甲子 甲子"), StructuralPattern::Blade);
        // 乙 is yin: 乙 day in 寅 month is not a blade.
        assert_ne!(classify("甲子 丙寅 乙丑 丙子"), StructuralPattern::Blade);
    }

    #[test]
    fn revealed_month_stem() {
        // 甲 day, 丙午 month: 丙 hidden in 午, 식신.
        assert_eq!(
            classify("甲子 丙午 甲子 甲子"),
            StructuralPattern::Revealed(TenRelation::EatingGod)
        );
    }

    #[test]
    fn dominant_hidden_stem_fallback() {
        // 甲 day, 甲午 month: 甲 not hidden in 午; principal 丁 is 상관.
        assert_eq!(
            classify("甲子 甲午 甲子 甲子"),
            StructuralPattern::Dominant(TenRelation::HurtingOfficer)
        );
    }

    #[test]
    fn peer_month_stem_is_revealed() {
        // 辛 day, 庚申 month: 庚 is hidden in 申 and is 겁재 to 辛.
        assert_eq!(
            classify("甲子 庚申 辛卯 甲午"),
            StructuralPattern::Revealed(TenRelation::RobWealth)
        );
    }

    #[test]
    fn peer_principal_qi_is_dominant() {
        // 乙 day, 庚寅 month: 庚 is not hidden in 寅; principal 甲 is 겁재.
        let p = classify("庚申 庚寅 乙酉 辛巳");
        assert_eq!(p, StructuralPattern::Dominant(TenRelation::RobWealth));
        assert_eq!(p.label(), "겁재격");
    }

    #[test]
    fn prevailing_relation_and_threshold() {
        let chart = ChartCharacters::parse("甲子 庚申 辛卯 甲午").unwrap();
        let scores = strength_scores(&chart);
        assert!(matches!(
            prevailing_pattern(&scores, &AnalysisConfig::default()),
            StructuralPattern::Prevailing(_)
        ));
        let strict = AnalysisConfig {
            pattern_min_score: 100.0,
        };
        assert_eq!(
            prevailing_pattern(&scores, &strict),
            StructuralPattern::Indeterminate
        );
    }

    #[test]
    fn every_month_branch_classifies() {
        for text in ["甲子 丙子 丙午 甲午", "甲子 乙丑 壬戌 辛亥", "甲子 戊辰 癸酉 癸亥"] {
            let p = classify(text);
            assert_ne!(p, StructuralPattern::Indeterminate, "{text}");
        }
    }
}
