//! The ten Heavenly Stems (천간).
//!
//! Stems alternate Yang/Yin and walk the elements in generation order,
//! two stems per element: 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use std::str::FromStr;

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::TableError;

/// A Heavenly Stem, named by its Korean reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cyclic order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based cyclic index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a cyclic index, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Stem {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem advanced by `steps` (may be negative), wrapping modulo 10.
    pub const fn offset(self, steps: i64) -> Stem {
        ALL_STEMS[(self.index() as i64 + steps).rem_euclid(10) as usize]
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        STEM_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    /// Base element.
    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Resolve a stem from its hangul, hanja, or romanized name.
    pub fn from_symbol(symbol: &str) -> Option<Stem> {
        let s = symbol.trim();
        ALL_STEMS.iter().copied().find(|stem| {
            stem.hangul() == s || stem.hanja() == s || stem.name().eq_ignore_ascii_case(s)
        })
    }
}

impl FromStr for Stem {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stem::from_symbol(s).ok_or_else(|| TableError::InvalidChartCharacter(s.to_string()))
    }
}
