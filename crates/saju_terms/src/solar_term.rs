//! The 24 solar terms (절기) and the 12 month-boundary terms among them.
//!
//! Month-boundary terms (절) open each chart month. In chart order they run
//! 입춘 (寅 month) through 소한 (丑 month). Within a calendar year the
//! chronological order is 소한 (early January) first and 대설 (early
//! December) last, so the two terms that "close" a chart year, 대설 and
//! 소한, fall in different calendar years.

use std::fmt::{Display, Formatter};

use saju_tables::Branch;
use serde::Serialize;

/// One of the 24 solar terms, starting at spring onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms, spring onset first.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

/// The 12 month-boundary terms in chart-month order (입춘 = month 0).
pub const MONTH_BOUNDARY_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

/// Month branch for each boundary term, same order as [`MONTH_BOUNDARY_TERMS`].
pub const MONTH_BRANCHES: [Branch; 12] = [
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
    Branch::Ja,
    Branch::Chuk,
];

/// The two boundary terms that close a chart year.
pub const CLOSING_TERMS: [SolarTerm; 2] = [SolarTerm::Daeseol, SolarTerm::Sohan];

const TERM_HANGUL: [&str; 24] = [
    "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지", "소서", "대서",
    "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지", "소한", "대한",
];

const TERM_HANJA: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

const TERM_NAMES: [&str; 24] = [
    "Ipchun",
    "Usu",
    "Gyeongchip",
    "Chunbun",
    "Cheongmyeong",
    "Gogu",
    "Ipha",
    "Soman",
    "Mangjong",
    "Haji",
    "Soseo",
    "Daeseo",
    "Ipchu",
    "Cheoseo",
    "Baengno",
    "Chubun",
    "Hallo",
    "Sanggang",
    "Ipdong",
    "Soseol",
    "Daeseol",
    "Dongji",
    "Sohan",
    "Daehan",
];

impl SolarTerm {
    /// 0-based index (입춘=0 .. 대한=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        TERM_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self.index() as usize]
    }

    /// Month-boundary terms are the even-indexed ones.
    pub const fn is_month_boundary(self) -> bool {
        self.index() % 2 == 0
    }

    /// Position among the 12 boundary terms (입춘=0 .. 소한=11).
    pub const fn boundary_order(self) -> Option<u8> {
        if self.is_month_boundary() {
            Some(self.index() / 2)
        } else {
            None
        }
    }

    /// Month branch opened by this term, for boundary terms only.
    pub const fn month_branch(self) -> Option<Branch> {
        match self.boundary_order() {
            Some(order) => Some(MONTH_BRANCHES[order as usize]),
            None => None,
        }
    }

    /// Resolve a term from its hangul, hanja, or romanized name.
    ///
    /// `清明` is accepted alongside the Korean-form `淸明`.
    pub fn from_symbol(symbol: &str) -> Option<SolarTerm> {
        let s = symbol.trim();
        if s == "清明" {
            return Some(SolarTerm::Cheongmyeong);
        }
        ALL_SOLAR_TERMS.iter().copied().find(|t| {
            t.hangul() == s || t.hanja() == s || t.name().eq_ignore_ascii_case(s)
        })
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hangul())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_boundaries() {
        let n = ALL_SOLAR_TERMS
            .iter()
            .filter(|t| t.is_month_boundary())
            .count();
        assert_eq!(n, 12);
        for (i, t) in MONTH_BOUNDARY_TERMS.iter().enumerate() {
            assert_eq!(t.boundary_order(), Some(i as u8));
        }
    }

    #[test]
    fn boundary_branches() {
        assert_eq!(SolarTerm::Ipchun.month_branch(), Some(Branch::In));
        assert_eq!(SolarTerm::Daeseol.month_branch(), Some(Branch::Ja));
        assert_eq!(SolarTerm::Sohan.month_branch(), Some(Branch::Chuk));
        assert_eq!(SolarTerm::Usu.month_branch(), None);
    }

    #[test]
    fn symbols_resolve() {
        assert_eq!(SolarTerm::from_symbol("입춘"), Some(SolarTerm::Ipchun));
        assert_eq!(SolarTerm::from_symbol("穀雨"), Some(SolarTerm::Gogu));
        assert_eq!(SolarTerm::from_symbol("清明"), Some(SolarTerm::Cheongmyeong));
        assert_eq!(SolarTerm::from_symbol("sohan"), Some(SolarTerm::Sohan));
        assert_eq!(SolarTerm::from_symbol("설날"), None);
    }
}
