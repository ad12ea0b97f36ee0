//! Pairwise and triple interactions between chart characters.
//!
//! Pairs and triples are enumerated over chart positions, so each unordered
//! set of positions is examined once per rule.

use saju_tables::rules::SELF_PUNISHMENT_BRANCHES;
use saju_tables::{
    Branch, Element, branch_six_combination, half_combination, is_branch_break, is_branch_clash,
    is_branch_harm, is_pair_punishment, is_stem_clash, is_triple_punishment, stem_combination,
    three_harmony,
};
use serde::Serialize;

use crate::chart::{ChartCharacters, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum InteractionKind {
    StemCombination,
    StemClash,
    BranchSixCombination,
    BranchClash,
    BranchHarm,
    BranchBreak,
    BranchPunishment,
    ThreeHarmony,
    HalfCombination,
    TriplePunishment,
    SelfPunishment,
}

impl InteractionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StemCombination => "Stem Combination",
            Self::StemClash => "Stem Clash",
            Self::BranchSixCombination => "Branch Six-Combination",
            Self::BranchClash => "Branch Clash",
            Self::BranchHarm => "Branch Harm",
            Self::BranchBreak => "Branch Break",
            Self::BranchPunishment => "Branch Punishment",
            Self::ThreeHarmony => "Three Harmony",
            Self::HalfCombination => "Half Combination",
            Self::TriplePunishment => "Triple Punishment",
            Self::SelfPunishment => "Self Punishment",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::StemCombination => "천간합",
            Self::StemClash => "천간충",
            Self::BranchSixCombination => "육합",
            Self::BranchClash => "육충",
            Self::BranchHarm => "육해",
            Self::BranchBreak => "육파",
            Self::BranchPunishment => "형",
            Self::ThreeHarmony => "삼합",
            Self::HalfCombination => "반합",
            Self::TriplePunishment => "삼형",
            Self::SelfPunishment => "자형",
        }
    }
}

/// A detected interaction and the chart positions involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub positions: Vec<Position>,
    /// Resulting element, for combinations.
    pub element: Option<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InteractionReport {
    pub interactions: Vec<Interaction>,
}

impl InteractionReport {
    pub fn of_kind(&self, kind: InteractionKind) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter().filter(move |i| i.kind == kind)
    }

    pub fn involving(&self, position: Position) -> impl Iterator<Item = &Interaction> {
        self.interactions
            .iter()
            .filter(move |i| i.positions.contains(&position))
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    fn push(&mut self, kind: InteractionKind, positions: Vec<Position>, element: Option<Element>) {
        self.interactions.push(Interaction {
            kind,
            positions,
            element,
        });
    }
}

fn pairs<T: Copy>(items: &[T; 4]) -> impl Iterator<Item = (T, T)> + '_ {
    (0..4).flat_map(move |i| (i + 1..4).map(move |j| (items[i], items[j])))
}

fn triples<T: Copy>(items: &[T; 4]) -> impl Iterator<Item = [T; 3]> + '_ {
    (0..4).flat_map(move |i| {
        (i + 1..4).flat_map(move |j| (j + 1..4).map(move |k| [items[i], items[j], items[k]]))
    })
}

/// Detect every interaction in the chart.
pub fn analyze_interactions(chart: &ChartCharacters) -> InteractionReport {
    let mut report = InteractionReport::default();

    let stems = chart.positioned_stems();
    for ((pa, a), (pb, b)) in pairs(&stems) {
        if let Some(element) = stem_combination(a, b) {
            report.push(InteractionKind::StemCombination, vec![pa, pb], Some(element));
        }
        if is_stem_clash(a, b) {
            report.push(InteractionKind::StemClash, vec![pa, pb], None);
        }
    }

    let branches = chart.positioned_branches();
    for ((pa, a), (pb, b)) in pairs(&branches) {
        if let Some(element) = branch_six_combination(a, b) {
            report.push(InteractionKind::BranchSixCombination, vec![pa, pb], Some(element));
        }
        if is_branch_clash(a, b) {
            report.push(InteractionKind::BranchClash, vec![pa, pb], None);
        }
        if is_branch_harm(a, b) {
            report.push(InteractionKind::BranchHarm, vec![pa, pb], None);
        }
        if is_branch_break(a, b) {
            report.push(InteractionKind::BranchBreak, vec![pa, pb], None);
        }
        if is_pair_punishment(a, b) {
            report.push(InteractionKind::BranchPunishment, vec![pa, pb], None);
        }
    }

    // Full three-harmonies, remembered so half-combinations inside them are skipped.
    let mut full: Vec<(Element, [Position; 3])> = Vec::new();
    for triple in triples(&branches) {
        let positions = triple.map(|(p, _)| p);
        let members = triple.map(|(_, b)| b);
        if let Some(harmony) = three_harmony(members) {
            full.push((harmony.element, positions));
            report.push(
                InteractionKind::ThreeHarmony,
                positions.to_vec(),
                Some(harmony.element),
            );
        }
        if is_triple_punishment(members) {
            report.push(InteractionKind::TriplePunishment, positions.to_vec(), None);
        }
    }

    for ((pa, a), (pb, b)) in pairs(&branches) {
        let Some(harmony) = half_combination(a, b) else {
            continue;
        };
        let subsumed = full
            .iter()
            .any(|(e, ps)| *e == harmony.element && ps.contains(&pa) && ps.contains(&pb));
        if !subsumed {
            report.push(
                InteractionKind::HalfCombination,
                vec![pa, pb],
                Some(harmony.element),
            );
        }
    }

    for branch in SELF_PUNISHMENT_BRANCHES {
        let positions = positions_of(&branches, branch);
        if positions.len() >= 2 {
            report.push(InteractionKind::SelfPunishment, positions, None);
        }
    }

    report
}

fn positions_of(branches: &[(Position, Branch); 4], branch: Branch) -> Vec<Position> {
    branches
        .iter()
        .filter(|(_, b)| *b == branch)
        .map(|(p, _)| *p)
        .collect()
}
