//! Derived specification record and its closed attribute enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::family::Family;

/// Label rendered for attributes with no defined value.
pub const NOT_APPLICABLE: &str = "N/A";

/// CPU socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Socket {
    #[serde(rename = "LGA1155")]
    Lga1155,
    #[serde(rename = "LGA1150")]
    Lga1150,
    #[serde(rename = "LGA1151")]
    Lga1151,
    #[serde(rename = "LGA1200")]
    Lga1200,
}

impl Socket {
    /// Socket label, e.g. `"LGA1151"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Socket::Lga1155 => "LGA1155",
            Socket::Lga1150 => "LGA1150",
            Socket::Lga1151 => "LGA1151",
            Socket::Lga1200 => "LGA1200",
        }
    }
}

/// Market positioning tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Entry level")]
    EntryLevel,
    Mainstream,
    Performance,
    Enthusiast,
}

impl Tier {
    /// Tier label, e.g. `"Entry level"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::EntryLevel => "Entry level",
            Tier::Mainstream => "Mainstream",
            Tier::Performance => "Performance",
            Tier::Enthusiast => "Enthusiast",
        }
    }
}

/// Microarchitecture codename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Microarchitecture {
    #[serde(rename = "Sandy Bridge")]
    SandyBridge,
    #[serde(rename = "Ivy Bridge")]
    IvyBridge,
    Haswell,
    Broadwell,
    Skylake,
    #[serde(rename = "Kaby Lake")]
    KabyLake,
    #[serde(rename = "Coffee Lake")]
    CoffeeLake,
    #[serde(rename = "Coffee Lake Refresh")]
    CoffeeLakeRefresh,
    #[serde(rename = "Comet Lake")]
    CometLake,
    #[serde(rename = "Rocket Lake")]
    RocketLake,
}

impl Microarchitecture {
    /// Codename, e.g. `"Coffee Lake Refresh"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Microarchitecture::SandyBridge => "Sandy Bridge",
            Microarchitecture::IvyBridge => "Ivy Bridge",
            Microarchitecture::Haswell => "Haswell",
            Microarchitecture::Broadwell => "Broadwell",
            Microarchitecture::Skylake => "Skylake",
            Microarchitecture::KabyLake => "Kaby Lake",
            Microarchitecture::CoffeeLake => "Coffee Lake",
            Microarchitecture::CoffeeLakeRefresh => "Coffee Lake Refresh",
            Microarchitecture::CometLake => "Comet Lake",
            Microarchitecture::RocketLake => "Rocket Lake",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Socket, Tier, Microarchitecture);

/// Technical attributes derived from one accepted model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Specification {
    /// Normalized model name the record was derived from.
    pub name: String,
    /// Product family.
    pub family: Family,
    /// Model code with its last three digits dropped.
    pub generation: u32,
    /// Process node in nanometres.
    pub lithography_nm: u32,
    /// Physical cores.
    pub core_count: u32,
    /// Multiplier unlocked for overclocking.
    pub unlocked: bool,
    /// Turbo Boost support.
    pub has_turbo: bool,
    /// Integrated graphics present.
    pub has_igpu: bool,
    /// Hyper-Threading support.
    pub has_smt: bool,
    /// `None` when no socket is defined for the generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<Socket>,
    /// Market tier of the family.
    pub tier: Tier,
    /// `None` when no codename is defined for the generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Microarchitecture>,
}

impl Specification {
    /// Socket label, or `"N/A"`.
    pub fn socket_label(&self) -> &'static str {
        self.socket.map_or(NOT_APPLICABLE, Socket::as_str)
    }

    /// Microarchitecture label, or `"N/A"`.
    pub fn architecture_label(&self) -> &'static str {
        self.architecture
            .map_or(NOT_APPLICABLE, Microarchitecture::as_str)
    }
}
