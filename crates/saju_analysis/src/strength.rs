//! Weighted element and Ten-Relation scoring.
//!
//! Every character contributes its positional weight. A stem adds the full
//! weight to its element and to its relation with the day stem. A branch
//! splits its weight across its hidden stems in proportion to their
//! fractions, normalized by the branch's recorded fraction sum so that the
//! whole weight is always distributed.

use std::collections::BTreeMap;

use saju_tables::{
    ALL_ELEMENTS, ALL_TEN_RELATIONS, Element, Stem, TenRelation, hidden_stems, hidden_weight_sum,
    ten_relation,
};
use serde::Serialize;

use crate::chart::{ALL_POSITIONS, ChartCharacters, Position};

/// Positional weights in [`ALL_POSITIONS`] order.
pub const POSITION_WEIGHTS: [f64; 8] = [0.7, 0.9, 1.0, 3.0, 1.2, 1.5, 0.6, 0.8];

pub fn position_weight(position: Position) -> f64 {
    POSITION_WEIGHTS[position.index() as usize]
}

/// Sum of all positional weights.
pub fn total_weight() -> f64 {
    POSITION_WEIGHTS.iter().sum()
}

/// Element and Ten-Relation score maps. Every key is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthScores {
    pub elements: BTreeMap<Element, f64>,
    pub relations: BTreeMap<TenRelation, f64>,
}

impl Default for StrengthScores {
    fn default() -> Self {
        Self {
            elements: ALL_ELEMENTS.iter().map(|e| (*e, 0.0)).collect(),
            relations: ALL_TEN_RELATIONS.iter().map(|r| (*r, 0.0)).collect(),
        }
    }
}

impl StrengthScores {
    pub fn element(&self, element: Element) -> f64 {
        self.elements.get(&element).copied().unwrap_or(0.0)
    }

    pub fn relation(&self, relation: TenRelation) -> f64 {
        self.relations.get(&relation).copied().unwrap_or(0.0)
    }

    pub fn element_total(&self) -> f64 {
        self.elements.values().sum()
    }

    pub fn relation_total(&self) -> f64 {
        self.relations.values().sum()
    }

    fn add(&mut self, day: Stem, stem: Stem, amount: f64) {
        *self.elements.entry(stem.element()).or_insert(0.0) += amount;
        *self
            .relations
            .entry(ten_relation(day, stem))
            .or_insert(0.0) += amount;
    }

    /// Copy with every score rounded to one decimal place.
    pub fn rounded(&self) -> Self {
        Self {
            elements: self.elements.iter().map(|(k, v)| (*k, round1(*v))).collect(),
            relations: self
                .relations
                .iter()
                .map(|(k, v)| (*k, round1(*v)))
                .collect(),
        }
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Unrounded scores.
pub fn raw_scores(chart: &ChartCharacters) -> StrengthScores {
    let day = chart.day_stem();
    let mut scores = StrengthScores::default();
    for position in ALL_POSITIONS {
        let weight = position_weight(position);
        if let Some(stem) = chart.stem_at(position) {
            scores.add(day, stem, weight);
        } else if let Some(branch) = chart.branch_at(position) {
            let sum = hidden_weight_sum(branch);
            for hidden in hidden_stems(branch) {
                scores.add(day, hidden.stem, weight * hidden.weight / sum);
            }
        }
    }
    scores
}

/// Scores rounded to one decimal place.
pub fn strength_scores(chart: &ChartCharacters) -> StrengthScores {
    raw_scores(chart).rounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn chart(text: &str) -> ChartCharacters {
        ChartCharacters::parse(text).unwrap()
    }

    #[test]
    fn weights_are_distinct() {
        let mut w = POSITION_WEIGHTS.to_vec();
        w.sort_by(f64::total_cmp);
        w.dedup();
        assert_eq!(w.len(), 8);
        assert!(position_weight(Position::MonthBranch) > position_weight(Position::HourStem));
        assert!(position_weight(Position::DayBranch) > position_weight(Position::YearStem));
    }

    #[test]
    fn element_total_equals_weight_total() {
        for text in ["甲辰 己巳 甲申 辛未", "壬子 壬子 壬子 壬子", "丙午 戊戌 庚寅 癸亥"] {
            let s = raw_scores(&chart(text));
            assert!((s.element_total() - total_weight()).abs() < EPS, "{text}");
            assert!((s.relation_total() - total_weight()).abs() < EPS, "{text}");
        }
    }

    #[test]
    fn single_element_chart() {
        // 壬子 ×4: every stem and hidden stem is water.
        let s = raw_scores(&chart("壬子 壬子 壬子 壬子"));
        assert!((s.element(Element::Water) - total_weight()).abs() < EPS);
        assert_eq!(s.element(Element::Fire), 0.0);
    }

    #[test]
    fn stem_weight_goes_to_relation() {
        // Day 甲, month stem 庚: 庚 is 편관 (SevenKillings) to 甲.
        let s = raw_scores(&chart("甲子 庚午 甲子 甲子"));
        assert!(s.relation(TenRelation::SevenKillings) >= position_weight(Position::MonthStem));
    }

    #[test]
    fn rounding_to_one_decimal() {
        assert_eq!(round1(1.26), 1.3);
        assert_eq!(round1(0.04), 0.0);
        let s = strength_scores(&chart("甲辰 己巳 甲申 辛未"));
        for v in s.elements.values().chain(s.relations.values()) {
            assert!(((v * 10.0).round() - v * 10.0).abs() < EPS);
        }
    }
}
