//! Attribute rule tables.
//!
//! Every rule is a total function of the family, the generation and, for
//! suffix-driven attributes, the parsed suffix or normalized name.
//! Generations without a defined socket or codename resolve to `None`.

use crate::family::Family;
use crate::specification::{Microarchitecture, Socket, Specification};
use crate::validate::ParsedIdentity;

/// Suffixes of multiplier-unlocked parts.
pub const UNLOCKED_SUFFIXES: [&str; 3] = ["k", "kf", "ks"];

/// Derive the full specification of an accepted identity.
pub fn resolve(identity: &ParsedIdentity) -> Specification {
    let family = identity.family;
    let generation = identity.generation();

    Specification {
        name: identity.name.clone(),
        family,
        generation,
        lithography_nm: lithography_nm(generation),
        core_count: core_count(family, generation),
        unlocked: is_unlocked(&identity.suffix),
        has_turbo: has_turbo(family, generation),
        has_igpu: has_igpu(&identity.name),
        has_smt: has_smt(family, generation),
        socket: socket(generation),
        tier: family.tier(),
        architecture: architecture(generation),
    }
}

/// Process node in nanometres.
pub fn lithography_nm(generation: u32) -> u32 {
    match generation {
        2 => 32,
        3 | 4 => 22,
        _ => 14,
    }
}

/// Physical core count, keyed on family and generation.
pub fn core_count(family: Family, generation: u32) -> u32 {
    match (family, generation) {
        (Family::I3, 0..=7) => 2,
        (Family::I3, _) => 4,
        (Family::I5, 0..=7) => 4,
        (Family::I5, _) => 6,
        (Family::I7, 0..=7) => 4,
        (Family::I7, 8) => 6,
        (Family::I7, _) => 8,
        (Family::I9, 9 | 11) => 8,
        (Family::I9, _) => 10,
    }
}

/// Whether the suffix marks an unlocked multiplier.
pub fn is_unlocked(suffix: &str) -> bool {
    let suffix = suffix.to_ascii_lowercase();
    UNLOCKED_SUFFIXES.contains(&suffix.as_str())
}

/// Turbo Boost support. The i3 line gained it in generation 9.
pub fn has_turbo(family: Family, generation: u32) -> bool {
    match family {
        Family::I3 => generation >= 9,
        Family::I5 | Family::I7 | Family::I9 => true,
    }
}

/// Parts ending in `f` ship without integrated graphics.
pub fn has_igpu(name: &str) -> bool {
    !name.ends_with('f')
}

/// Hyper-Threading support.
///
/// The i3 line dropped Hyper-Threading for generations 8 and 9 only.
pub fn has_smt(family: Family, generation: u32) -> bool {
    match family {
        Family::I7 | Family::I9 => true,
        Family::I5 => generation >= 8,
        Family::I3 => !matches!(generation, 8 | 9),
    }
}

/// Desktop socket of a generation, `None` before generation 2.
pub fn socket(generation: u32) -> Option<Socket> {
    match generation {
        2 | 3 => Some(Socket::Lga1155),
        4 | 5 => Some(Socket::Lga1150),
        6..=9 => Some(Socket::Lga1151),
        10..=u32::MAX => Some(Socket::Lga1200),
        _ => None,
    }
}

/// Microarchitecture codename of a generation, `None` outside 2..=11.
pub fn architecture(generation: u32) -> Option<Microarchitecture> {
    let arch = match generation {
        2 => Microarchitecture::SandyBridge,
        3 => Microarchitecture::IvyBridge,
        4 => Microarchitecture::Haswell,
        5 => Microarchitecture::Broadwell,
        6 => Microarchitecture::Skylake,
        7 => Microarchitecture::KabyLake,
        8 => Microarchitecture::CoffeeLake,
        9 => Microarchitecture::CoffeeLakeRefresh,
        10 => Microarchitecture::CometLake,
        11 => Microarchitecture::RocketLake,
        _ => return None,
    };
    Some(arch)
}
