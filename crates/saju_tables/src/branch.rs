//! The twelve Earthly Branches (지지).

use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::TableError;
use crate::hidden_stems::{HiddenStem, hidden_stems};

/// An Earthly Branch, named by its Korean reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cyclic order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

/// Element of each branch, by index.
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 0-based cyclic index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a cyclic index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Branch {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch advanced by `steps` (may be negative), wrapping modulo 12.
    pub const fn offset(self, steps: i64) -> Branch {
        ALL_BRANCHES[(self.index() as i64 + steps).rem_euclid(12) as usize]
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        BRANCH_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Surface element of the branch.
    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Hidden stems with their fixed fractional weights, initial qi first.
    pub fn hidden_stems(self) -> &'static [HiddenStem] {
        hidden_stems(self)
    }

    /// Resolve a branch from its hangul, hanja, or romanized name.
    pub fn from_symbol(symbol: &str) -> Option<Branch> {
        let s = symbol.trim();
        ALL_BRANCHES.iter().copied().find(|branch| {
            branch.hangul() == s || branch.hanja() == s || branch.name().eq_ignore_ascii_case(s)
        })
    }
}

impl FromStr for Branch {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::from_symbol(s).ok_or_else(|| TableError::InvalidChartCharacter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), *b);
        }
    }

    #[test]
    fn elements() {
        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::In.element(), Element::Wood);
        assert_eq!(Branch::O.element(), Element::Fire);
        assert_eq!(Branch::Yu.element(), Element::Metal);
        assert_eq!(Branch::Sul.element(), Element::Earth);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Branch::Hae.offset(1), Branch::Ja);
        assert_eq!(Branch::Ja.offset(-1), Branch::Hae);
        assert_eq!(Branch::In.offset(-14), Branch::Ja);
    }

    #[test]
    fn symbols_resolve() {
        assert_eq!(Branch::from_symbol("자"), Some(Branch::Ja));
        assert_eq!(Branch::from_symbol("亥"), Some(Branch::Hae));
        assert_eq!(Branch::from_symbol("myo"), Some(Branch::Myo));
        assert_eq!(Branch::from_symbol("갑"), None);
        assert!("?".parse::<Branch>().is_err());
    }
}
