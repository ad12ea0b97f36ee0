//! The eight chart characters and their positions.

use std::fmt::{Display, Formatter};

use saju_tables::{Branch, CycleIndex, Stem, TableError};
use serde::Serialize;

/// One of the eight character slots of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Position {
    YearStem,
    YearBranch,
    MonthStem,
    MonthBranch,
    DayStem,
    DayBranch,
    HourStem,
    HourBranch,
}

pub const ALL_POSITIONS: [Position; 8] = [
    Position::YearStem,
    Position::YearBranch,
    Position::MonthStem,
    Position::MonthBranch,
    Position::DayStem,
    Position::DayBranch,
    Position::HourStem,
    Position::HourBranch,
];

pub const STEM_POSITIONS: [Position; 4] = [
    Position::YearStem,
    Position::MonthStem,
    Position::DayStem,
    Position::HourStem,
];

pub const BRANCH_POSITIONS: [Position; 4] = [
    Position::YearBranch,
    Position::MonthBranch,
    Position::DayBranch,
    Position::HourBranch,
];

impl Position {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::YearStem => "YearStem",
            Self::YearBranch => "YearBranch",
            Self::MonthStem => "MonthStem",
            Self::MonthBranch => "MonthBranch",
            Self::DayStem => "DayStem",
            Self::DayBranch => "DayBranch",
            Self::HourStem => "HourStem",
            Self::HourBranch => "HourBranch",
        }
    }

    pub const fn is_stem(self) -> bool {
        self.index() % 2 == 0
    }

    /// Pillar slot (0 = year .. 3 = hour).
    pub const fn pillar(self) -> usize {
        self.index() as usize / 2
    }
}

/// The four stems and four branches of a chart, year pillar first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChartCharacters {
    pub stems: [Stem; 4],
    pub branches: [Branch; 4],
}

impl ChartCharacters {
    pub const fn new(stems: [Stem; 4], branches: [Branch; 4]) -> Self {
        Self { stems, branches }
    }

    /// Characters of four sexagenary pillars (year, month, day, hour).
    pub fn from_cycle(pillars: [CycleIndex; 4]) -> Self {
        Self {
            stems: pillars.map(CycleIndex::stem),
            branches: pillars.map(CycleIndex::branch),
        }
    }

    /// Parse four two-character pillars separated by whitespace, e.g.
    /// `"甲辰 己巳 甲申 辛未"` or `"갑진 기사 갑신 신미"`.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let pillars: Vec<&str> = text.split_whitespace().collect();
        if pillars.len() != 4 {
            return Err(TableError::InvalidChartCharacter(text.trim().to_string()));
        }
        let mut stems = [Stem::Gap; 4];
        let mut branches = [Branch::Ja; 4];
        for (slot, pillar) in pillars.iter().enumerate() {
            let mut chars = pillar.chars();
            let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
                return Err(TableError::InvalidChartCharacter(pillar.to_string()));
            };
            stems[slot] = s.to_string().parse()?;
            branches[slot] = b.to_string().parse()?;
        }
        Ok(Self { stems, branches })
    }

    pub const fn day_stem(&self) -> Stem {
        self.stems[2]
    }

    pub const fn month_stem(&self) -> Stem {
        self.stems[1]
    }

    pub const fn month_branch(&self) -> Branch {
        self.branches[1]
    }

    pub const fn stem_at(&self, position: Position) -> Option<Stem> {
        if position.is_stem() {
            Some(self.stems[position.pillar()])
        } else {
            None
        }
    }

    pub const fn branch_at(&self, position: Position) -> Option<Branch> {
        if position.is_stem() {
            None
        } else {
            Some(self.branches[position.pillar()])
        }
    }

    /// The four stems paired with their positions.
    pub fn positioned_stems(&self) -> [(Position, Stem); 4] {
        [0, 1, 2, 3].map(|i| (STEM_POSITIONS[i], self.stems[i]))
    }

    /// The four branches paired with their positions.
    pub fn positioned_branches(&self) -> [(Position, Branch); 4] {
        [0, 1, 2, 3].map(|i| (BRANCH_POSITIONS[i], self.branches[i]))
    }
}

impl Display for ChartCharacters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..4 {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", self.stems[i].hanja(), self.branches[i].hanja())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hanja_and_hangul() {
        let a = ChartCharacters::parse("甲辰 己巳 甲申 辛未").unwrap();
        let b = ChartCharacters::parse("갑진 기사 갑진 신미").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.day_stem(), Stem::Gap);
        assert_eq!(a.month_branch(), Branch::Sa);
        assert_eq!(a.to_string(), "甲辰 己巳 甲申 辛未");
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        assert!(matches!(
            ChartCharacters::parse("甲辰 己巳 甲X 辛未"),
            Err(TableError::InvalidChartCharacter(_))
        ));
        assert!(ChartCharacters::parse("甲辰 己巳 甲辰").is_err());
        assert!(ChartCharacters::parse("甲辰 己巳 甲申 辛未未").is_err());
    }

    #[test]
    fn position_slots() {
        assert!(Position::DayStem.is_stem());
        assert_eq!(Position::HourBranch.pillar(), 3);
        let c = ChartCharacters::parse("甲辰 己巳 甲申 辛未").unwrap();
        assert_eq!(c.branch_at(Position::HourBranch), Some(Branch::Mi));
        assert_eq!(c.stem_at(Position::HourBranch), None);
    }
}
