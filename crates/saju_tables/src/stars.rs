//! Special branches keyed by stem or branch: prosperity/blade seats used by
//! pattern classification, and the symbolic-star (신살) lookup tables.

use crate::branch::Branch;
use crate::element::Polarity;
use crate::rules::THREE_HARMONIES;
use crate::stem::Stem;

/// Seat of prosperity (건록) for each day stem, by stem index.
const PROSPERITY: [Branch; 10] = [
    Branch::In,
    Branch::Myo,
    Branch::Sa,
    Branch::O,
    Branch::Sa,
    Branch::O,
    Branch::Sin,
    Branch::Yu,
    Branch::Hae,
    Branch::Ja,
];

/// Nobleman (천을귀인) branches, by stem index.
const NOBLEMAN: [[Branch; 2]; 10] = [
    [Branch::Chuk, Branch::Mi],
    [Branch::Ja, Branch::Sin],
    [Branch::Hae, Branch::Yu],
    [Branch::Hae, Branch::Yu],
    [Branch::Chuk, Branch::Mi],
    [Branch::Ja, Branch::Sin],
    [Branch::Chuk, Branch::Mi],
    [Branch::In, Branch::O],
    [Branch::Sa, Branch::Myo],
    [Branch::Sa, Branch::Myo],
];

/// Academic star (문창귀인), by stem index.
const ACADEMIC: [Branch; 10] = [
    Branch::Sa,
    Branch::O,
    Branch::Sin,
    Branch::Yu,
    Branch::Sin,
    Branch::Yu,
    Branch::Hae,
    Branch::Ja,
    Branch::In,
    Branch::Myo,
];

/// Day pillars carrying the Kui-Gang (괴강) mark.
pub const KUI_GANG_DAYS: [(Stem, Branch); 4] = [
    (Stem::Gyeong, Branch::Jin),
    (Stem::Gyeong, Branch::Sul),
    (Stem::Im, Branch::Jin),
    (Stem::Mu, Branch::Sul),
];

/// Seat of prosperity for a day stem.
pub const fn prosperity_branch(stem: Stem) -> Branch {
    PROSPERITY[stem.index() as usize]
}

/// Goat-blade (양인) seat: the branch after the prosperity seat, Yang stems only.
pub const fn blade_branch(stem: Stem) -> Option<Branch> {
    match stem.polarity() {
        Polarity::Yang => Some(prosperity_branch(stem).offset(1)),
        Polarity::Yin => None,
    }
}

pub const fn nobleman_branches(stem: Stem) -> [Branch; 2] {
    NOBLEMAN[stem.index() as usize]
}

pub const fn academic_branch(stem: Stem) -> Branch {
    ACADEMIC[stem.index() as usize]
}

/// Group star branches for the three-harmony frame containing `branch`:
/// `(peach_blossom, travelling_horse, canopy)`.
///
/// Peach blossom sits three branches before the frame's peak, the horse clashes
/// the frame's birth branch, and the canopy is the frame's storage branch.
/// `None` only if `branch` belongs to no frame.
pub fn group_star_branches(branch: Branch) -> Option<(Branch, Branch, Branch)> {
    let frame = THREE_HARMONIES
        .iter()
        .find(|h| h.members.contains(&branch))?;
    let [birth, peak, storage] = frame.members;
    Some((peak.offset(-3), birth.offset(6), storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn blade_for_yang_only() {
        assert_eq!(blade_branch(Stem::Gap), Some(Branch::Myo));
        assert_eq!(blade_branch(Stem::Byeong), Some(Branch::O));
        assert_eq!(blade_branch(Stem::Mu), Some(Branch::O));
        assert_eq!(blade_branch(Stem::Gyeong), Some(Branch::Yu));
        assert_eq!(blade_branch(Stem::Im), Some(Branch::Ja));
        assert_eq!(blade_branch(Stem::Eul), None);
    }

    #[test]
    fn prosperity_seats() {
        assert_eq!(prosperity_branch(Stem::Gap), Branch::In);
        assert_eq!(prosperity_branch(Stem::Mu), Branch::Sa);
        assert_eq!(prosperity_branch(Stem::Gye), Branch::Ja);
    }

    #[test]
    fn group_stars_water_frame() {
        // 申子辰: peach blossom 酉, horse 寅, canopy 辰.
        for b in [Branch::Sin, Branch::Ja, Branch::Jin] {
            assert_eq!(
                group_star_branches(b),
                Some((Branch::Yu, Branch::In, Branch::Jin))
            );
        }
    }

    #[test]
    fn group_stars_other_frames() {
        assert_eq!(
            group_star_branches(Branch::O),
            Some((Branch::Myo, Branch::Sin, Branch::Sul))
        );
        assert_eq!(
            group_star_branches(Branch::Yu),
            Some((Branch::O, Branch::Hae, Branch::Chuk))
        );
        assert_eq!(
            group_star_branches(Branch::Myo),
            Some((Branch::Ja, Branch::Sa, Branch::Mi))
        );
    }

    #[test]
    fn every_branch_belongs_to_a_frame() {
        for b in ALL_BRANCHES {
            assert!(THREE_HARMONIES.iter().any(|h| h.members.contains(&b)));
            assert!(group_star_branches(b).is_some(), "{}", b.hanja());
        }
    }
}
