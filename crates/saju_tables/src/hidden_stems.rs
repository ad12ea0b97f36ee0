//! Hidden stems (지장간) held inside each branch.
//!
//! Each branch holds 2-3 stems: an initial qi, an optional middle qi and a
//! principal qi. Fractions are the monthly day allotments (out of 30)
//! rounded to two places, so some branches total 0.99 rather than 1.0.
//! The table is kept exactly as given; consumers that need the full
//! branch weight distributed divide by [`hidden_weight_sum`].

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// A stem hidden in a branch with its fractional weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub weight: f64,
}

const fn hs(stem: Stem, weight: f64) -> HiddenStem {
    HiddenStem { stem, weight }
}

const JA: [HiddenStem; 2] = [hs(Stem::Im, 0.33), hs(Stem::Gye, 0.67)];
const CHUK: [HiddenStem; 3] = [hs(Stem::Gye, 0.30), hs(Stem::Sin, 0.10), hs(Stem::Gi, 0.60)];
const IN: [HiddenStem; 3] = [hs(Stem::Mu, 0.23), hs(Stem::Byeong, 0.23), hs(Stem::Gap, 0.53)];
const MYO: [HiddenStem; 2] = [hs(Stem::Gap, 0.33), hs(Stem::Eul, 0.67)];
const JIN: [HiddenStem; 3] = [hs(Stem::Eul, 0.30), hs(Stem::Gye, 0.10), hs(Stem::Mu, 0.60)];
const SA: [HiddenStem; 3] = [hs(Stem::Mu, 0.23), hs(Stem::Gyeong, 0.23), hs(Stem::Byeong, 0.53)];
const O: [HiddenStem; 3] = [hs(Stem::Byeong, 0.33), hs(Stem::Gi, 0.30), hs(Stem::Jeong, 0.37)];
const MI: [HiddenStem; 3] = [hs(Stem::Jeong, 0.30), hs(Stem::Eul, 0.10), hs(Stem::Gi, 0.60)];
const SIN: [HiddenStem; 3] = [hs(Stem::Mu, 0.23), hs(Stem::Im, 0.23), hs(Stem::Gyeong, 0.53)];
const YU: [HiddenStem; 2] = [hs(Stem::Gyeong, 0.33), hs(Stem::Sin, 0.67)];
const SUL: [HiddenStem; 3] = [hs(Stem::Sin, 0.30), hs(Stem::Jeong, 0.10), hs(Stem::Mu, 0.60)];
const HAE: [HiddenStem; 3] = [hs(Stem::Mu, 0.23), hs(Stem::Gap, 0.23), hs(Stem::Im, 0.53)];

/// Recorded total of each branch's hidden-stem fractions, by branch index.
pub const HIDDEN_STEM_WEIGHT_SUMS: [f64; 12] = [
    1.00, // 子
    1.00, // 丑
    0.99, // 寅
    1.00, // 卯
    1.00, // 辰
    0.99, // 巳
    1.00, // 午
    1.00, // 未
    0.99, // 申
    1.00, // 酉
    1.00, // 戌
    0.99, // 亥
];

/// Hidden stems of a branch, initial qi first, principal qi last.
pub fn hidden_stems(branch: Branch) -> &'static [HiddenStem] {
    match branch {
        Branch::Ja => &JA,
        Branch::Chuk => &CHUK,
        Branch::In => &IN,
        Branch::Myo => &MYO,
        Branch::Jin => &JIN,
        Branch::Sa => &SA,
        Branch::O => &O,
        Branch::Mi => &MI,
        Branch::Sin => &SIN,
        Branch::Yu => &YU,
        Branch::Sul => &SUL,
        Branch::Hae => &HAE,
    }
}

/// Recorded fraction total for a branch.
pub const fn hidden_weight_sum(branch: Branch) -> f64 {
    HIDDEN_STEM_WEIGHT_SUMS[branch.index() as usize]
}

/// Highest-weighted hidden stem (the principal qi). Ties keep the earlier
/// entry.
pub fn dominant_hidden_stem(branch: Branch) -> Option<HiddenStem> {
    hidden_stems(branch)
        .iter()
        .copied()
        .reduce(|best, h| if h.weight > best.weight { h } else { best })
}

/// Whether `stem` is among the branch's hidden stems.
pub fn is_hidden_in(stem: Stem, branch: Branch) -> bool {
    hidden_stems(branch).iter().any(|h| h.stem == stem)
}
