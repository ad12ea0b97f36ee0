//! Sexagenary (60-step) stem-branch cycle (육십갑자).
//!
//! Position `i` pairs `Stem::from_index(i % 10)` with `Branch::from_index(i % 12)`.
//! Only pairs of equal parity occur, so 60 of the 120 stem×branch
//! combinations are valid. Index 0 is 甲子, index 59 is 癸亥.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::error::TableError;
use crate::stem::Stem;

/// Number of positions in the cycle.
pub const CYCLE_LEN: u8 = 60;

/// A position in the 60-cycle, always in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct CycleIndex(u8);

impl CycleIndex {
    /// 甲子.
    pub const FIRST: CycleIndex = CycleIndex(0);

    /// Checked constructor.
    pub const fn new(index: u8) -> Option<Self> {
        if index < CYCLE_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Reduce any signed integer into the cycle.
    pub const fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(CYCLE_LEN as i64) as u8)
    }

    /// Index of a stem/branch pair, or `None` if their parities differ.
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)`: `i = (6s − 5b) mod 60`.
    pub const fn from_pair(stem: Stem, branch: Branch) -> Option<Self> {
        let s = stem.index() as i64;
        let b = branch.index() as i64;
        if (s - b) % 2 != 0 {
            return None;
        }
        Some(Self::wrapping(6 * s - 5 * b))
    }

    /// Like [`from_pair`](Self::from_pair), reporting the offending pair.
    pub fn try_from_pair(stem: Stem, branch: Branch) -> Result<Self, TableError> {
        Self::from_pair(stem, branch).ok_or(TableError::InvalidPair {
            stem: stem.hanja(),
            branch: branch.hanja(),
        })
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Stem {
        Stem::from_index(self.0 % 10)
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 % 12)
    }

    /// Step forward (positive) or backward (negative) through the cycle.
    pub const fn offset(self, steps: i64) -> Self {
        Self::wrapping(self.0 as i64 + steps)
    }

    /// Hanja label, e.g. `甲子`.
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem().hanja(), self.branch().hanja())
    }

    /// Hangul label, e.g. `갑자`.
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem().hangul(), self.branch().hangul())
    }
}

impl From<CycleIndex> for u8 {
    fn from(c: CycleIndex) -> u8 {
        c.0
    }
}

impl Display for CycleIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().hanja(), self.branch().hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn roundtrip_all_sixty() {
        for i in 0..CYCLE_LEN {
            let c = CycleIndex::new(i).unwrap();
            assert_eq!(c.stem().index(), i % 10);
            assert_eq!(c.branch().index(), i % 12);
            assert_eq!(CycleIndex::from_pair(c.stem(), c.branch()), Some(c));
        }
    }

    #[test]
    fn exactly_sixty_valid_pairs() {
        let mut seen = [false; 60];
        let mut valid = 0;
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                if let Some(c) = CycleIndex::from_pair(s, b) {
                    assert!(!seen[c.value() as usize], "duplicate index {}", c.value());
                    seen[c.value() as usize] = true;
                    valid += 1;
                }
            }
        }
        assert_eq!(valid, 60);
    }

    #[test]
    fn parity_mismatch_rejected() {
        assert_eq!(CycleIndex::from_pair(Stem::Gap, Branch::Chuk), None);
        assert!(CycleIndex::try_from_pair(Stem::Eul, Branch::Ja).is_err());
    }

    #[test]
    fn known_labels() {
        assert_eq!(CycleIndex::FIRST.hanja(), "甲子");
        assert_eq!(CycleIndex::new(54).unwrap().hanja(), "戊午");
        assert_eq!(CycleIndex::new(59).unwrap().hangul(), "계해");
    }

    #[test]
    fn offset_wraps_negative() {
        assert_eq!(CycleIndex::FIRST.offset(-1).value(), 59);
        assert_eq!(CycleIndex::new(58).unwrap().offset(3).value(), 1);
        assert_eq!(CycleIndex::wrapping(-121).value(), 59);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(CycleIndex::new(60).is_none());
    }
}
