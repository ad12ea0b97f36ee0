//! Structural checks over the fixed rule tables.

use saju_tables::rules::{
    BRANCH_BREAKS, BRANCH_CLASHES, BRANCH_HARMS, BRANCH_SIX_COMBINATIONS, STEM_CLASHES,
    STEM_COMBINATIONS, THREE_HARMONIES, TRIPLE_PUNISHMENTS,
};
use saju_tables::{ALL_BRANCHES, ALL_STEMS, Branch, CycleIndex, Element, Stem};

fn unordered<T: Ord + Copy>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

#[test]
fn table_sizes() {
    assert_eq!(STEM_COMBINATIONS.len(), 5);
    assert_eq!(STEM_CLASHES.len(), 4);
    assert_eq!(BRANCH_SIX_COMBINATIONS.len(), 6);
    assert_eq!(BRANCH_CLASHES.len(), 6);
    assert_eq!(BRANCH_HARMS.len(), 6);
    assert_eq!(BRANCH_BREAKS.len(), 6);
    assert_eq!(TRIPLE_PUNISHMENTS.len(), 2);
}

#[test]
fn branch_pair_tables_have_no_duplicates() {
    let tables: [&[(Branch, Branch)]; 3] = [&BRANCH_CLASHES, &BRANCH_HARMS, &BRANCH_BREAKS];
    for table in tables {
        let mut pairs: Vec<_> = table.iter().map(|(a, b)| unordered(*a, *b)).collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(pairs.len(), table.len());
    }
}

#[test]
fn every_stem_combines_exactly_once() {
    for s in ALL_STEMS {
        let n = STEM_COMBINATIONS
            .iter()
            .filter(|(a, b, _)| *a == s || *b == s)
            .count();
        assert_eq!(n, 1, "{}", s.hanja());
    }
}

#[test]
fn stem_combinations_are_five_apart() {
    for (a, b, _) in STEM_COMBINATIONS {
        assert_eq!(b.index() - a.index(), 5);
    }
}

#[test]
fn every_branch_six_combines_exactly_once() {
    for b in ALL_BRANCHES {
        let n = BRANCH_SIX_COMBINATIONS
            .iter()
            .filter(|(x, y, _)| *x == b || *y == b)
            .count();
        assert_eq!(n, 1, "{}", b.hanja());
    }
}

#[test]
fn three_harmony_peaks_match_element() {
    for h in THREE_HARMONIES {
        assert_eq!(h.dominant().element(), h.element);
    }
    assert_eq!(THREE_HARMONIES[0].element, Element::Water);
}

#[test]
fn jiazi_and_guihai_bound_the_cycle() {
    assert_eq!(CycleIndex::from_pair(Stem::Gap, Branch::Ja).unwrap().value(), 0);
    assert_eq!(CycleIndex::from_pair(Stem::Gye, Branch::Hae).unwrap().value(), 59);
}
