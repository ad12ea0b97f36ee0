use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use saju_rs::{
    ChartAnalysis, ChartConfig, ChartEngine, ChartInstant, ChartReport, CycleSnapshot,
    ElementAdvice, Gender, GreatLuckCycle, Pillar, PillarError, PillarRole, RejectedRecord,
    active_luck_entry, analyze_characters,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_TERMS: &str = "data/solar_terms_2023_2025.csv";

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (saju) chart CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Solar-term table (`year,term,instant` per line, local clock time)
    #[arg(long, global = true, default_value = DEFAULT_TERMS)]
    terms: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: pillars, Great Luck and analysis
    Chart {
        /// Birth instant (YYYY-MM-DD HH:MM)
        birth: String,
        #[arg(long, value_enum)]
        gender: GenderArg,
    },
    /// Day pillar of a calendar date (no term table needed)
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Great Luck cycle for a birth
    Luck {
        /// Birth instant (YYYY-MM-DD HH:MM)
        birth: String,
        #[arg(long, value_enum)]
        gender: GenderArg,
        /// Also report the entry active at this age
        #[arg(long)]
        age: Option<u32>,
    },
    /// Year pillars for consecutive chart years
    Annual {
        from_year: i32,
        #[arg(long, default_value = "10")]
        count: u32,
    },
    /// The 12 month pillars of a chart year
    Monthly { chart_year: i32 },
    /// Day pillars of a calendar month
    Daily { year: i32, month: u32 },
    /// Year, month and day pillars in force at an instant
    At {
        /// Instant (YYYY-MM-DD HH:MM)
        instant: String,
    },
    /// Summarize the loaded term table and rejected records
    Terms,
    /// Analyze a chart given as eight characters, e.g. "甲辰 己巳 甲申 辛未"
    Analyze { chart: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Chart { birth, gender } => {
            let engine = load_engine(&cli.terms, config);
            let report = engine.chart(&parse_instant(&birth), gender.into());
            if cli.json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }

        Commands::Day { date } => {
            let pillar = saju_rs::day_pillar(&parse_instant(&date));
            if cli.json {
                print_json(&pillar);
            } else {
                println!("{pillar}");
            }
        }

        Commands::Luck { birth, gender, age } => {
            let engine = load_engine(&cli.terms, config);
            let luck = engine
                .great_luck(&parse_instant(&birth), gender.into())
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&luck);
            } else {
                print_luck(&luck);
                if let Some(age) = age {
                    match active_luck_entry(&luck, age) {
                        Some(e) => println!("Age {age}: step {} {}", e.step, e.pillar),
                        None => println!("Age {age}: outside the luck sequence"),
                    }
                }
            }
        }

        Commands::Annual { from_year, count } => {
            let years = saju_rs::annual(from_year, count);
            if cli.json {
                print_json(&years);
            } else {
                for y in &years {
                    println!("{}  {}", y.chart_year, y.pillar);
                }
            }
        }

        Commands::Monthly { chart_year } => {
            let engine = load_engine(&cli.terms, config);
            let months = engine.monthly(chart_year).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&months);
            } else {
                for m in &months {
                    println!("{}  {}  {}", m.pillar, m.term.term, m.term.instant);
                }
            }
        }

        Commands::Daily { year, month } => {
            let days = saju_rs::daily(year, month).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&days);
            } else {
                for d in &days {
                    println!("{}  {}", d.date, d.pillar);
                }
            }
        }

        Commands::At { instant } => {
            let engine = load_engine(&cli.terms, config);
            let snapshot = engine.cycles_at(&parse_instant(&instant));
            if cli.json {
                print_json(&SnapshotJson::from(&snapshot));
            } else {
                println!("At {}", snapshot.target);
                println!("  Year:  {}", outcome_text(&snapshot.year));
                println!("  Month: {}", outcome_text(&snapshot.month));
                println!("  Day:   {}", snapshot.day);
            }
        }

        Commands::Terms => {
            let engine = load_engine(&cli.terms, config);
            let index = engine.index();
            if cli.json {
                print_json(&TermsJson {
                    years: index.years(),
                    terms: index.len(),
                    rejected: engine.rejected(),
                });
            } else {
                println!("{} terms across {:?}", index.len(), index.years());
                for year in index.years() {
                    let missing = index.missing_boundaries(year);
                    if !missing.is_empty() {
                        let names: Vec<&str> = missing.iter().map(|t| t.hangul()).collect();
                        println!("  {year}: missing {}", names.join(" "));
                    }
                }
                for r in engine.rejected() {
                    println!("  rejected #{}: {}", r.ordinal, r.reason);
                }
            }
        }

        Commands::Analyze { chart } => {
            let analysis = analyze_characters(&chart, &config).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&analysis);
            } else {
                print_analysis(&analysis);
            }
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> ChartConfig {
    match path {
        Some(p) => ChartConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => ChartConfig::default(),
    }
}

fn load_engine(terms: &PathBuf, config: ChartConfig) -> ChartEngine {
    let engine = ChartEngine::load(terms, config).unwrap_or_else(|e| {
        eprintln!("Failed to load term table: {e}");
        std::process::exit(1);
    });
    debug!(rejected = engine.rejected().len(), "engine ready");
    engine
}

fn parse_instant(text: &str) -> ChartInstant {
    ChartInstant::parse(text).unwrap_or_else(|e| {
        eprintln!("Invalid date-time '{text}': {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn outcome_text<T: std::fmt::Display>(value: &Result<T, PillarError>) -> String {
    match value {
        Ok(v) => v.to_string(),
        Err(e) => format!("unavailable ({e})"),
    }
}

fn print_report(report: &ChartReport) {
    println!("Birth: {} ({:?})", report.birth, report.gender);
    if let Some(year) = report.chart_year {
        println!("Chart year: {year}");
    }
    for role in [PillarRole::Hour, PillarRole::Day, PillarRole::Month, PillarRole::Year] {
        println!("  {:<6} {}", role.name(), outcome_text(report.pillar(role)));
    }
    if let Some(term) = &report.month_term {
        println!("Month term: {} {}", term.term, term.instant);
    }
    for w in &report.warnings {
        println!("Warning: {w}");
    }
    match &report.luck {
        Ok(luck) => print_luck(luck),
        Err(e) => println!("Great Luck: unavailable ({e})"),
    }
    if let Some(analysis) = &report.analysis {
        print_analysis(analysis);
    }
}

fn print_luck(luck: &GreatLuckCycle) {
    println!(
        "Great Luck: {} from age {} ({} {}, {:.2} days)",
        luck.direction.name(),
        luck.start_age,
        luck.target.term,
        luck.target.instant,
        luck.days_to_target
    );
    for e in &luck.entries {
        println!("  {:>2}  age {:>3}  {}", e.step, e.start_age, e.pillar);
    }
}

fn print_analysis(a: &ChartAnalysis) {
    let elements: Vec<String> = a
        .scores
        .rounded()
        .elements
        .iter()
        .map(|(e, v)| format!("{}={v}", e.name()))
        .collect();
    println!("Elements: {}", elements.join(" "));
    println!(
        "Body strength: {} ({}, difference {})",
        a.body_strength.label.name(),
        a.body_strength.label.hangul(),
        a.body_strength.difference
    );
    println!("Pattern: {}", a.pattern.label());
    match &a.advice {
        ElementAdvice::Directed {
            favorable,
            unfavorable,
        } => {
            let f: Vec<&str> = favorable.iter().map(|e| e.name()).collect();
            let u: Vec<&str> = unfavorable.iter().map(|e| e.name()).collect();
            println!("Favorable: {}  Unfavorable: {}", f.join(" "), u.join(" "));
        }
        ElementAdvice::ContextDependent => println!("Favorable: context dependent"),
    }
    for i in &a.interactions.interactions {
        let at: Vec<&str> = i.positions.iter().map(|p| p.name()).collect();
        println!("  {} [{}]", i.kind.name(), at.join(", "));
    }
    for m in &a.markers {
        let at: Vec<&str> = m.positions.iter().map(|p| p.name()).collect();
        println!("  {} {} [{}]", m.kind.name(), m.kind.hanja(), at.join(", "));
    }
}

#[derive(Serialize)]
struct SnapshotJson {
    target: ChartInstant,
    #[serde(serialize_with = "saju_rs::serialize_outcome")]
    year: Result<Pillar, PillarError>,
    #[serde(serialize_with = "saju_rs::serialize_outcome")]
    month: Result<Pillar, PillarError>,
    day: Pillar,
}

impl From<&CycleSnapshot> for SnapshotJson {
    fn from(s: &CycleSnapshot) -> Self {
        Self {
            target: s.target,
            year: s.year.clone(),
            month: s.month.clone(),
            day: s.day,
        }
    }
}

#[derive(Serialize)]
struct TermsJson<'a> {
    years: Vec<i32>,
    terms: usize,
    rejected: &'a [RejectedRecord],
}
