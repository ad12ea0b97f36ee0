//! Index queries against the bundled 2023–2025 term table.

use saju_tables::Branch;
use saju_terms::{Direction, SolarTerm, SolarTermIndex, TermError, parse_term_table};
use saju_time::ChartInstant;

const TABLE: &str = include_str!("../../../data/solar_terms_2023_2025.csv");

fn load() -> SolarTermIndex {
    let built = SolarTermIndex::build(parse_term_table(TABLE));
    assert!(built.rejected.is_empty(), "{:?}", built.rejected);
    built.index
}

fn at(text: &str) -> ChartInstant {
    ChartInstant::parse(text).unwrap()
}

#[test]
fn bundled_table_is_complete() {
    let idx = load();
    assert_eq!(idx.years(), vec![2023, 2024, 2025]);
    for year in idx.years() {
        assert!(idx.has_complete_year(year), "{year}");
    }
    assert_eq!(idx.len(), 36);
}

#[test]
fn spring_onset_minute_boundary() {
    let idx = load();
    let before = idx.governing_term(&at("2024-02-04 17:26")).unwrap();
    let on = idx.governing_term(&at("2024-02-04 17:27")).unwrap();
    assert_eq!(before.term, SolarTerm::Sohan);
    assert_eq!(before.month_branch(), Some(Branch::Chuk));
    assert_eq!(on.term, SolarTerm::Ipchun);
    assert_eq!(on.month_branch(), Some(Branch::In));
}

#[test]
fn new_year_uses_previous_december_term() {
    let idx = load();
    let g = idx.governing_term(&at("2025-01-01 09:00")).unwrap();
    assert_eq!((g.term, g.year), (SolarTerm::Daeseol, 2024));
    assert_eq!(g.chart_year(), 2024);
}

#[test]
fn first_year_without_predecessor_fails() {
    let idx = load();
    assert_eq!(
        idx.governing_term(&at("2023-01-03 00:00")),
        Err(TermError::InsufficientTermData { year: 2022 })
    );
}

#[test]
fn forward_from_december_crosses_year() {
    let idx = load();
    let g = idx.governing_term(&at("2024-12-25 00:00")).unwrap();
    let next = idx.adjacent_term(&g, Direction::Forward).unwrap();
    assert_eq!(next.term, SolarTerm::Sohan);
    assert_eq!(next.instant, at("2025-01-05 11:32"));
}
