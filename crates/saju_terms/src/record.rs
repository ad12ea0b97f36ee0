//! Raw term records and their validation.
//!
//! Upstream term tables are often exported from spreadsheets, so the instant
//! field may carry stray text around the date-time ("2024-02-04 17:27 (KST)").
//! The instant is pulled out with a regex before parsing; anything that still
//! fails is rejected with a reason instead of aborting the load.

use std::sync::LazyLock;

use regex::Regex;
use saju_time::ChartInstant;
use serde::Serialize;

use crate::error::RejectReason;
use crate::solar_term::SolarTerm;

static INSTANT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}[/\-.]\d{1,2}[/\-.]\d{1,2}[ T]+\d{1,2}:\d{1,2}(?::\d{1,2})?")
        .expect("instant pattern is a valid regex")
});

/// A term record as supplied by an external source, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RawTermRecord {
    pub year: String,
    pub term: String,
    pub instant: String,
}

impl RawTermRecord {
    pub fn new(
        year: impl Into<String>,
        term: impl Into<String>,
        instant: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            term: term.into(),
            instant: instant.into(),
        }
    }

    /// Validate into a typed record.
    pub fn resolve(&self) -> Result<SolarTermRecord, RejectReason> {
        let year_text = self.year.trim();
        if year_text.is_empty() {
            return Err(RejectReason::MissingField("year"));
        }
        let year: i32 = year_text
            .parse()
            .map_err(|_| RejectReason::InvalidYear(year_text.to_string()))?;

        let term_text = self.term.trim();
        if term_text.is_empty() {
            return Err(RejectReason::MissingField("term"));
        }
        let term = SolarTerm::from_symbol(term_text)
            .ok_or_else(|| RejectReason::UnknownTerm(term_text.to_string()))?;

        if self.instant.trim().is_empty() {
            return Err(RejectReason::MissingField("instant"));
        }
        let instant = extract_instant(&self.instant)
            .ok_or_else(|| RejectReason::InvalidInstant(self.instant.trim().to_string()))?;

        Ok(SolarTermRecord {
            term,
            year,
            instant,
        })
    }
}

/// A validated (term, calendar year, instant) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarTermRecord {
    pub term: SolarTerm,
    pub year: i32,
    pub instant: ChartInstant,
}

/// A raw record that failed validation, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// 0-based position in the supplied record sequence.
    pub ordinal: usize,
    pub record: RawTermRecord,
    pub reason: RejectReason,
}

/// Find the first date-time in free text and parse it.
pub fn extract_instant(text: &str) -> Option<ChartInstant> {
    let found = INSTANT_PATTERN.find(text)?;
    let normalized = found.as_str().replace(['/', '.'], "-");
    ChartInstant::parse(&normalized).ok()
}

/// Parse a `year,term,instant` table. Blank lines and `#` comments are
/// skipped; rows with too few fields come back with empty fields so that
/// index construction reports them.
pub fn parse_term_table(content: &str) -> Vec<RawTermRecord> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.splitn(3, ',');
            let year = fields.next().unwrap_or_default();
            let term = fields.next().unwrap_or_default();
            let instant = fields.next().unwrap_or_default();
            RawTermRecord::new(year, term, instant)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_instant_from_noisy_text() {
        let i = extract_instant("입춘 2024/02/04 17:27 KST").unwrap();
        assert_eq!(i.to_string(), "2024-02-04 17:27:00");
        let i = extract_instant("2024.2.4 17:27:09").unwrap();
        assert_eq!(i.second(), 9);
        assert!(extract_instant("February 4th").is_none());
    }

    #[test]
    fn resolve_accepts_any_term_spelling() {
        let r = RawTermRecord::new("2024", "立春", "2024-02-04 17:27").resolve().unwrap();
        assert_eq!(r.term, SolarTerm::Ipchun);
        assert_eq!(r.year, 2024);
    }

    #[test]
    fn resolve_reports_reason() {
        assert_eq!(
            RawTermRecord::new("", "입춘", "2024-02-04 17:27").resolve(),
            Err(RejectReason::MissingField("year"))
        );
        assert_eq!(
            RawTermRecord::new("20x4", "입춘", "2024-02-04 17:27").resolve(),
            Err(RejectReason::InvalidYear("20x4".into()))
        );
        assert_eq!(
            RawTermRecord::new("2024", "설날", "2024-02-10 00:00").resolve(),
            Err(RejectReason::UnknownTerm("설날".into()))
        );
        assert_eq!(
            RawTermRecord::new("2024", "경칩", "2024-02-30 10:00").resolve(),
            Err(RejectReason::InvalidInstant("2024-02-30 10:00".into()))
        );
    }

    #[test]
    fn table_parsing() {
        let text = "# year,term,instant\n2024,입춘,2024-02-04 17:27\n\n2024,경칩\n";
        let rows = parse_term_table(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].term, "입춘");
        assert_eq!(rows[1].instant, "");
    }
}
