//! Ten Relations (십신) between the Day Stem and another stem.
//!
//! The relation is fixed by how the other stem's element relates to the
//! Day Stem's element (same / generated / restrained / restraining /
//! generating) and whether the two polarities match.

use serde::Serialize;

use crate::stem::Stem;

/// One of the ten relations, seen from the Day Stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TenRelation {
    /// 비견: same element, same polarity.
    Companion,
    /// 겁재: same element, opposite polarity.
    RobWealth,
    /// 식신: day generates it, same polarity.
    EatingGod,
    /// 상관: day generates it, opposite polarity.
    HurtingOfficer,
    /// 편재: day restrains it, same polarity.
    IndirectWealth,
    /// 정재: day restrains it, opposite polarity.
    DirectWealth,
    /// 편관: it restrains day, same polarity.
    SevenKillings,
    /// 정관: it restrains day, opposite polarity.
    DirectOfficer,
    /// 편인: it generates day, same polarity.
    IndirectResource,
    /// 정인: it generates day, opposite polarity.
    DirectResource,
}

pub const ALL_TEN_RELATIONS: [TenRelation; 10] = [
    TenRelation::Companion,
    TenRelation::RobWealth,
    TenRelation::EatingGod,
    TenRelation::HurtingOfficer,
    TenRelation::IndirectWealth,
    TenRelation::DirectWealth,
    TenRelation::SevenKillings,
    TenRelation::DirectOfficer,
    TenRelation::IndirectResource,
    TenRelation::DirectResource,
];

/// Relations that support the Day Stem (peers and resources).
pub const SUPPORTING_RELATIONS: [TenRelation; 4] = [
    TenRelation::Companion,
    TenRelation::RobWealth,
    TenRelation::IndirectResource,
    TenRelation::DirectResource,
];

/// Relations that drain the Day Stem (output, wealth, authority).
pub const DRAINING_RELATIONS: [TenRelation; 6] = [
    TenRelation::EatingGod,
    TenRelation::HurtingOfficer,
    TenRelation::IndirectWealth,
    TenRelation::DirectWealth,
    TenRelation::SevenKillings,
    TenRelation::DirectOfficer,
];

impl TenRelation {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Companion => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// Peer or resource relation.
    pub const fn is_supporting(self) -> bool {
        matches!(
            self,
            Self::Companion | Self::RobWealth | Self::IndirectResource | Self::DirectResource
        )
    }
}

/// Relation of `other` as seen from `day`.
pub const fn ten_relation(day: Stem, other: Stem) -> TenRelation {
    let d = day.element().index();
    let o = other.element().index();
    // Position of `other` along the generation cycle starting at `day`.
    let step = (o + 5 - d) % 5;
    let same_polarity = day.index() % 2 == other.index() % 2;
    let base = step * 2;
    let idx = if same_polarity { base } else { base + 1 };
    // step 0: peer, 1: output, 2: wealth, 3: authority, 4: resource
    ALL_TEN_RELATIONS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn gap_day_master() {
        let d = Stem::Gap;
        assert_eq!(ten_relation(d, Stem::Gap), TenRelation::Companion);
        assert_eq!(ten_relation(d, Stem::Eul), TenRelation::RobWealth);
        assert_eq!(ten_relation(d, Stem::Byeong), TenRelation::EatingGod);
        assert_eq!(ten_relation(d, Stem::Jeong), TenRelation::HurtingOfficer);
        assert_eq!(ten_relation(d, Stem::Mu), TenRelation::IndirectWealth);
        assert_eq!(ten_relation(d, Stem::Gi), TenRelation::DirectWealth);
        assert_eq!(ten_relation(d, Stem::Gyeong), TenRelation::SevenKillings);
        assert_eq!(ten_relation(d, Stem::Sin), TenRelation::DirectOfficer);
        assert_eq!(ten_relation(d, Stem::Im), TenRelation::IndirectResource);
        assert_eq!(ten_relation(d, Stem::Gye), TenRelation::DirectResource);
    }

    #[test]
    fn yin_day_master() {
        let d = Stem::Sin;
        assert_eq!(ten_relation(d, Stem::Byeong), TenRelation::DirectOfficer);
        assert_eq!(ten_relation(d, Stem::Jeong), TenRelation::SevenKillings);
        assert_eq!(ten_relation(d, Stem::Gap), TenRelation::DirectWealth);
        assert_eq!(ten_relation(d, Stem::Gi), TenRelation::IndirectResource);
    }

    #[test]
    fn each_day_master_sees_all_ten() {
        for d in ALL_STEMS {
            let mut seen = [false; 10];
            for o in ALL_STEMS {
                seen[ten_relation(d, o).index() as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn supporting_and_draining_partition() {
        for r in ALL_TEN_RELATIONS {
            assert_ne!(SUPPORTING_RELATIONS.contains(&r), DRAINING_RELATIONS.contains(&r));
            assert_eq!(r.is_supporting(), SUPPORTING_RELATIONS.contains(&r));
        }
    }
}
