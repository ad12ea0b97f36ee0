//! Fixed interaction rule tables: combinations, clashes, punishments,
//! harms and breaks between stems and between branches.
//!
//! Pairs are stored once; lookups compare them as unordered sets.
//!
//! All four three-harmony frames (申子辰, 亥卯未, 寅午戌, 巳酉丑) are
//! tabulated, so every branch belongs to exactly one frame.

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

// ---------------------------------------------------------------------------
// Stem pairs
// ---------------------------------------------------------------------------

/// Five stem combinations (천간합) with the element they transform into.
pub const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Gap, Stem::Gi, Element::Earth),
    (Stem::Eul, Stem::Gyeong, Element::Metal),
    (Stem::Byeong, Stem::Sin, Element::Water),
    (Stem::Jeong, Stem::Im, Element::Wood),
    (Stem::Mu, Stem::Gye, Element::Fire),
];

/// Four stem clashes (천간충).
pub const STEM_CLASHES: [(Stem, Stem); 4] = [
    (Stem::Gap, Stem::Gyeong),
    (Stem::Eul, Stem::Sin),
    (Stem::Byeong, Stem::Im),
    (Stem::Jeong, Stem::Gye),
];

// ---------------------------------------------------------------------------
// Branch pairs
// ---------------------------------------------------------------------------

/// Six branch combinations (육합) with their resulting element.
pub const BRANCH_SIX_COMBINATIONS: [(Branch, Branch, Element); 6] = [
    (Branch::Ja, Branch::Chuk, Element::Earth),
    (Branch::In, Branch::Hae, Element::Wood),
    (Branch::Myo, Branch::Sul, Element::Fire),
    (Branch::Jin, Branch::Yu, Element::Metal),
    (Branch::Sa, Branch::Sin, Element::Water),
    (Branch::O, Branch::Mi, Element::Fire),
];

/// Six branch clashes (육충): branches six apart.
pub const BRANCH_CLASHES: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

/// Six branch harms (육해).
pub const BRANCH_HARMS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Sa),
    (Branch::Myo, Branch::Jin),
    (Branch::Sin, Branch::Hae),
    (Branch::Yu, Branch::Sul),
];

/// Six branch breaks (육파).
pub const BRANCH_BREAKS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Yu),
    (Branch::Chuk, Branch::Jin),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::O),
    (Branch::Sa, Branch::Sin),
    (Branch::Mi, Branch::Sul),
];

/// The two-branch punishment (子卯 무례지형).
pub const BRANCH_PAIR_PUNISHMENT: (Branch, Branch) = (Branch::Ja, Branch::Myo);

// ---------------------------------------------------------------------------
// Branch triples
// ---------------------------------------------------------------------------

/// A three-harmony frame (삼합). `members[1]` is the dominant (cardinal) branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeHarmony {
    pub members: [Branch; 3],
    pub element: Element,
}

impl ThreeHarmony {
    pub const fn dominant(&self) -> Branch {
        self.members[1]
    }
}

/// Three-harmony frames: birth, peak, storage of each element.
pub const THREE_HARMONIES: [ThreeHarmony; 4] = [
    ThreeHarmony {
        members: [Branch::Sin, Branch::Ja, Branch::Jin],
        element: Element::Water,
    },
    ThreeHarmony {
        members: [Branch::Hae, Branch::Myo, Branch::Mi],
        element: Element::Wood,
    },
    ThreeHarmony {
        members: [Branch::In, Branch::O, Branch::Sul],
        element: Element::Fire,
    },
    ThreeHarmony {
        members: [Branch::Sa, Branch::Yu, Branch::Chuk],
        element: Element::Metal,
    },
];

/// Three-branch punishments (삼형): 寅巳申 and 丑戌未.
pub const TRIPLE_PUNISHMENTS: [[Branch; 3]; 2] = [
    [Branch::In, Branch::Sa, Branch::Sin],
    [Branch::Chuk, Branch::Sul, Branch::Mi],
];

/// Branches that punish themselves when doubled (자형).
pub const SELF_PUNISHMENT_BRANCHES: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

fn same_pair<T: PartialEq>(a: T, b: T, x: T, y: T) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

/// Transformation element if the two stems combine.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|(x, y, _)| same_pair(a, b, *x, *y))
        .map(|(_, _, e)| *e)
}

pub fn is_stem_clash(a: Stem, b: Stem) -> bool {
    STEM_CLASHES.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

/// Resulting element if the two branches form a six-combination.
pub fn branch_six_combination(a: Branch, b: Branch) -> Option<Element> {
    BRANCH_SIX_COMBINATIONS
        .iter()
        .find(|(x, y, _)| same_pair(a, b, *x, *y))
        .map(|(_, _, e)| *e)
}

pub fn is_branch_clash(a: Branch, b: Branch) -> bool {
    BRANCH_CLASHES.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

pub fn is_branch_harm(a: Branch, b: Branch) -> bool {
    BRANCH_HARMS.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

pub fn is_branch_break(a: Branch, b: Branch) -> bool {
    BRANCH_BREAKS.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

pub fn is_pair_punishment(a: Branch, b: Branch) -> bool {
    let (x, y) = BRANCH_PAIR_PUNISHMENT;
    same_pair(a, b, x, y)
}

/// Whether the three branches are exactly the given set, in any order.
pub fn is_same_triple(triple: [Branch; 3], set: [Branch; 3]) -> bool {
    let mut a = triple;
    let mut b = set;
    a.sort();
    b.sort();
    a == b
}

/// Three-harmony frame formed by three branches, if any.
pub fn three_harmony(triple: [Branch; 3]) -> Option<&'static ThreeHarmony> {
    THREE_HARMONIES
        .iter()
        .find(|h| is_same_triple(triple, h.members))
}

/// Whether three branches form a triple punishment.
pub fn is_triple_punishment(triple: [Branch; 3]) -> bool {
    TRIPLE_PUNISHMENTS
        .iter()
        .any(|set| is_same_triple(triple, *set))
}

/// Three-harmony half-combination (dominant branch plus one partner).
pub fn half_combination(a: Branch, b: Branch) -> Option<&'static ThreeHarmony> {
    THREE_HARMONIES.iter().find(|h| {
        let d = h.dominant();
        let (p, q) = (h.members[0], h.members[2]);
        same_pair(a, b, d, p) || same_pair(a, b, d, q)
    })
}
