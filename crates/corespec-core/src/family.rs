//! Core product families.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::specification::Tier;

/// Marketing line of a Core desktop part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    I3,
    I5,
    I7,
    I9,
}

impl Family {
    /// All families, lowest tier first.
    pub const ALL: [Family; 4] = [Family::I3, Family::I5, Family::I7, Family::I9];

    /// Match the family token at the start of a normalized name.
    pub fn from_prefix(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| name.starts_with(family.as_str()))
    }

    /// The lowercase two-character token (`"i3"`, `"i5"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Family::I3 => "i3",
            Family::I5 => "i5",
            Family::I7 => "i7",
            Family::I9 => "i9",
        }
    }

    /// Market positioning of the family.
    pub fn tier(self) -> Tier {
        match self {
            Family::I3 => Tier::EntryLevel,
            Family::I5 => Tier::Mainstream,
            Family::I7 => Tier::Performance,
            Family::I9 => Tier::Enthusiast,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
