//! Symbolic stars (신살) present in a chart.

use saju_tables::stars::KUI_GANG_DAYS;
use saju_tables::{
    Branch, academic_branch, blade_branch, group_star_branches, nobleman_branches,
};
use serde::Serialize;

use crate::chart::{ChartCharacters, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerNature {
    Auspicious,
    Inauspicious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MarkerKind {
    Nobleman,
    Academic,
    GoatBlade,
    PeachBlossom,
    TravellingHorse,
    Canopy,
    KuiGang,
}

impl MarkerKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nobleman => "Nobleman",
            Self::Academic => "Academic Star",
            Self::GoatBlade => "Goat Blade",
            Self::PeachBlossom => "Peach Blossom",
            Self::TravellingHorse => "Travelling Horse",
            Self::Canopy => "Canopy",
            Self::KuiGang => "Kui-Gang",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Nobleman => "天乙貴人",
            Self::Academic => "文昌貴人",
            Self::GoatBlade => "羊刃",
            Self::PeachBlossom => "桃花",
            Self::TravellingHorse => "驛馬",
            Self::Canopy => "華蓋",
            Self::KuiGang => "魁罡",
        }
    }

    pub const fn nature(self) -> MarkerNature {
        match self {
            Self::Nobleman | Self::Academic => MarkerNature::Auspicious,
            _ => MarkerNature::Inauspicious,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub nature: MarkerNature,
    pub positions: Vec<Position>,
}

/// Branch positions matching any of `targets`, in chart order.
fn branch_positions(chart: &ChartCharacters, targets: &[Branch]) -> Vec<Position> {
    chart
        .positioned_branches()
        .iter()
        .filter(|(_, b)| targets.contains(b))
        .map(|(p, _)| *p)
        .collect()
}

/// Group stars are read from the year and day branches; a branch never
/// marks itself.
fn group_star_positions(
    chart: &ChartCharacters,
    pick: fn((Branch, Branch, Branch)) -> Branch,
) -> Vec<Position> {
    let mut positions: Vec<Position> = Vec::new();
    for reference in [Position::YearBranch, Position::DayBranch] {
        let Some(stars) = chart.branch_at(reference).and_then(group_star_branches) else {
            continue;
        };
        let star = pick(stars);
        for (p, b) in chart.positioned_branches() {
            if p != reference && b == star && !positions.contains(&p) {
                positions.push(p);
            }
        }
    }
    positions.sort();
    positions
}

/// Every marker present in the chart.
pub fn find_markers(chart: &ChartCharacters) -> Vec<Marker> {
    let day = chart.day_stem();
    let mut found: Vec<(MarkerKind, Vec<Position>)> = vec![
        (
            MarkerKind::Nobleman,
            branch_positions(chart, &nobleman_branches(day)),
        ),
        (
            MarkerKind::Academic,
            branch_positions(chart, &[academic_branch(day)]),
        ),
        (
            MarkerKind::GoatBlade,
            blade_branch(day)
                .map(|b| branch_positions(chart, &[b]))
                .unwrap_or_default(),
        ),
        (
            MarkerKind::PeachBlossom,
            group_star_positions(chart, |(peach, _, _)| peach),
        ),
        (
            MarkerKind::TravellingHorse,
            group_star_positions(chart, |(_, horse, _)| horse),
        ),
        (
            MarkerKind::Canopy,
            group_star_positions(chart, |(_, _, canopy)| canopy),
        ),
    ];

    let day_branch = chart.branches[2];
    if KUI_GANG_DAYS.contains(&(day, day_branch)) {
        found.push((
            MarkerKind::KuiGang,
            vec![Position::DayStem, Position::DayBranch],
        ));
    }

    found
        .into_iter()
        .filter(|(_, positions)| !positions.is_empty())
        .map(|(kind, positions)| Marker {
            kind,
            nature: kind.nature(),
            positions,
        })
        .collect()
}
