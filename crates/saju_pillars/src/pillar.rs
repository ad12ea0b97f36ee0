//! Chart pillars: a role plus a sexagenary position.

use std::fmt::{Display, Formatter};

use saju_tables::{Branch, CycleIndex, Stem};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

/// All four roles in chart order.
pub const ALL_PILLAR_ROLES: [PillarRole; 4] = [
    PillarRole::Year,
    PillarRole::Month,
    PillarRole::Day,
    PillarRole::Hour,
];

impl PillarRole {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// One pillar of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub role: PillarRole,
    pub index: CycleIndex,
}

impl Pillar {
    pub const fn new(role: PillarRole, index: CycleIndex) -> Self {
        Self { role, index }
    }

    pub const fn stem(&self) -> Stem {
        self.index.stem()
    }

    pub const fn branch(&self) -> Branch {
        self.index.branch()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Pillar", 5)?;
        s.serialize_field("role", &self.role)?;
        s.serialize_field("index", &self.index)?;
        s.serialize_field("stem", &self.stem())?;
        s.serialize_field("branch", &self.branch())?;
        s.serialize_field("hanja", &self.index.hanja())?;
        s.end()
    }
}
