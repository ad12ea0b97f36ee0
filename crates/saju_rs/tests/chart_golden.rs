//! End-to-end reports over the bundled 2023–2025 term table.

use saju_rs::{
    ChartConfig, ChartEngine, ChartError, ChartWarning, Direction, Gender, PillarError,
    RatHourConvention, TermError, active_luck_entry, analyze_characters,
};
use saju_time::ChartInstant;

const TABLE: &str = include_str!("../../../data/solar_terms_2023_2025.csv");

fn engine() -> ChartEngine {
    ChartEngine::from_term_table(TABLE, ChartConfig::default())
}

fn at(text: &str) -> ChartInstant {
    ChartInstant::parse(text).unwrap()
}

fn hanja(p: &Result<saju_rs::Pillar, PillarError>) -> String {
    p.as_ref().unwrap().to_string()
}

#[test]
fn bundled_table_loads_cleanly() {
    let e = engine();
    assert!(e.rejected().is_empty());
    assert_eq!(e.index().years(), vec![2023, 2024, 2025]);
}

#[test]
fn full_report_male() {
    let report = engine().chart(&at("2024-05-20 14:30"), Gender::Male);
    assert!(report.is_complete());
    assert_eq!(report.chart_year, Some(2024));
    assert_eq!(
        [hanja(&report.year), hanja(&report.month), hanja(&report.day), hanja(&report.hour)],
        ["甲辰", "己巳", "甲申", "辛未"]
    );

    let luck = report.luck.as_ref().unwrap();
    assert_eq!(luck.direction, Direction::Forward);
    assert_eq!(luck.target.instant, at("2024-06-05 13:10"));
    assert_eq!(luck.start_age, 5);
    assert_eq!(luck.entries.len(), 10);
    assert_eq!(luck.entries[0].pillar.hanja(), "庚午");
    assert_eq!(luck.entries[1].start_age, 15);
    assert_eq!(active_luck_entry(luck, 4), None);
    assert_eq!(active_luck_entry(luck, 17).map(|e| e.step), Some(2));
}

#[test]
fn full_report_female_runs_backwards() {
    let report = engine().chart(&at("2024-05-20 14:30"), Gender::Female);
    let luck = report.luck.as_ref().unwrap();
    assert_eq!(luck.direction, Direction::Reverse);
    assert_eq!(luck.target.instant, at("2024-05-05 09:10"));
    assert_eq!(luck.start_age, 5);
    assert_eq!(luck.entries[0].pillar.hanja(), "戊辰");
}

#[test]
fn analysis_present_for_complete_chart() {
    let report = engine().chart(&at("2024-05-20 14:30"), Gender::Male);
    let analysis = report.analysis.unwrap();
    let direct = analyze_characters("甲辰 己巳 甲申 辛未", &ChartConfig::default()).unwrap();
    assert_eq!(analysis, direct);
}

#[test]
fn year_outside_table_gives_partial_report() {
    let report = engine().chart(&at("1990-06-15 12:00"), Gender::Female);
    assert!(!report.is_complete());
    assert_eq!(hanja(&report.year), "庚午");
    assert!(report.day.is_ok());
    assert!(report.hour.is_ok());
    assert_eq!(
        report.month,
        Err(PillarError::Term(TermError::InsufficientTermData { year: 1990 }))
    );
    assert!(report.luck.is_err());
    assert!(report.analysis.is_none());
    assert!(
        report
            .warnings
            .contains(&ChartWarning::SpringOnsetFallback { year: 1990 })
    );

    let failed: Vec<&str> = report.failures().iter().map(|(name, _)| *name).collect();
    assert_eq!(failed, ["month", "luck"]);
}

#[test]
fn strict_spring_onset_fails_year() {
    let mut config = ChartConfig::default();
    config.pillars.spring_onset_fallback = false;
    let e = ChartEngine::from_term_table(TABLE, config);
    let report = e.chart(&at("1990-06-15 12:00"), Gender::Male);
    assert!(report.year.is_err());
    assert!(report.warnings.is_empty());
}

#[test]
fn late_rat_hour_conventions() {
    let birth = at("2024-05-20 23:40");
    let split = engine().chart(&birth, Gender::Male);

    let mut config = ChartConfig::default();
    config.pillars.rat_hour = RatHourConvention::AdvanceDay;
    let advance = ChartEngine::from_term_table(TABLE, config).chart(&birth, Gender::Male);

    assert_eq!(hanja(&split.day), "甲申");
    assert_eq!(hanja(&advance.day), "乙酉");
    assert_ne!(hanja(&split.hour), hanja(&advance.hour));
}

#[test]
fn report_serializes_errors_inline() {
    let e = engine();
    let ok = serde_json::to_value(e.chart(&at("2024-05-20 14:30"), Gender::Male)).unwrap();
    assert_eq!(ok["year"]["hanja"], "甲辰");
    assert_eq!(ok["gender"], "Male");
    assert!(ok["analysis"].is_object());

    let partial = serde_json::to_value(e.chart(&at("1990-06-15 12:00"), Gender::Male)).unwrap();
    assert!(partial["month"]["error"].is_string());
    assert!(partial["luck"]["error"].is_string());
    assert!(partial["analysis"].is_null());
}

#[test]
fn secondary_cycles() {
    let e = engine();
    let months = e.monthly(2024).unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].pillar.hanja(), "丙寅");
    assert!(e.monthly(2025).is_err());

    let snapshot = e.cycles_at(&at("2024-05-20 14:30"));
    assert_eq!(hanja(&snapshot.year), "甲辰");
    assert_eq!(hanja(&snapshot.month), "己巳");
    assert_eq!(snapshot.day.to_string(), "甲申");
    assert_eq!(e.annual(2024, 2)[1].pillar.hanja(), "乙巳");
}

#[test]
fn text_inputs_are_validated() {
    let e = engine();
    assert!(matches!(
        e.chart_from_text("2024-02-30 10:00", Gender::Male),
        Err(ChartError::InvalidDateTime(_))
    ));
    assert!(matches!(
        analyze_characters("甲辰 己巳 甲辰", &ChartConfig::default()),
        Err(ChartError::InvalidChartCharacter(_))
    ));
}

#[test]
fn missing_table_file_is_read_error() {
    let err = ChartEngine::load("/nonexistent/terms.csv", ChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::Read { .. }));
}
