//! Model-name validation and parsing.
//!
//! Accepted names follow the template `<family>-<digits><suffix>`, e.g.
//! `i7-6700K`. Checks run in a fixed order and the first failing check
//! decides the reported reason:
//!
//! 1. exact match in the extreme-edition list
//! 2. exact match in the legacy list
//! 3. family token (`i3`, `i5`, `i7`, `i9`)
//! 4. mobile suffix
//! 5. length in `[7, 9]` characters
//! 6. hyphen after the family token and a positive model code
//!
//! A mobile name of the wrong length is therefore reported as a mobile
//! variant, not as a malformed shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::family::Family;
use crate::reference::ReferenceLists;

/// Suffixes that mark laptop and mobile parts.
pub const MOBILE_SUFFIXES: [&str; 13] = [
    "h", "u", "y", "hk", "hq", "m", "g1", "g2", "g3", "g4", "g5", "g6", "g7",
];

/// Shortest accepted normalized name (`i3-2100`).
pub const MIN_NAME_LEN: usize = 7;
/// Longest accepted normalized name (`i9-10900k`).
pub const MAX_NAME_LEN: usize = 9;

/// Why a model name is not in the supported desktop class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsupportedKind {
    /// Extreme Edition or Core-X high-end desktop part.
    ExtremeEdition,
    /// Predates the second Core generation.
    LegacyGeneration,
    /// Laptop or other mobile part.
    MobileVariant,
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            UnsupportedKind::ExtremeEdition => "Extreme Edition and Core-X CPUs are not supported",
            UnsupportedKind::LegacyGeneration => {
                "CPU is too old; only 2nd generation and newer CPUs are supported"
            }
            UnsupportedKind::MobileVariant => "laptop CPUs are not supported; enter a desktop CPU",
        };
        f.write_str(msg)
    }
}

/// Reason a model name was rejected instead of classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// A recognizable name outside the supported hardware class.
    #[error("{0}")]
    UnsupportedClass(UnsupportedKind),

    /// The name does not fit the `i7-8700K` template.
    #[error("unrecognized CPU name; format it like \"i7-8700K\"")]
    MalformedShape,

    /// The name does not start with a Core family token.
    #[error("unrecognized CPU; expected an Intel Core i3, i5, i7, or i9 name")]
    UnrecognizedFamily,
}

/// Structured fields of an accepted model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParsedIdentity {
    /// Normalized model name.
    pub name: String,
    /// Family token at the start of the name.
    pub family: Family,
    /// Digits after the family token, always positive.
    pub model_code: u32,
    /// Letters after the family token, possibly empty.
    pub suffix: String,
}

impl ParsedIdentity {
    /// Generation number: the model code with its last three digits dropped.
    pub fn generation(&self) -> u32 {
        self.model_code / 1000
    }
}

/// Lowercase and trim surrounding whitespace.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates raw model names against a set of reference lists.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    lists: &'a ReferenceLists,
}

impl<'a> Validator<'a> {
    /// Create a validator that consults `lists` before any shape checks.
    pub fn new(lists: &'a ReferenceLists) -> Self {
        Self { lists }
    }

    /// Validate and parse a raw model name.
    pub fn validate(&self, raw: &str) -> Result<ParsedIdentity, RejectReason> {
        let name = normalize(raw);
        let result = self.check(name);
        match &result {
            Ok(identity) => tracing::debug!(
                name = %identity.name,
                family = %identity.family,
                model_code = identity.model_code,
                suffix = %identity.suffix,
                "accepted model name"
            ),
            Err(reason) => tracing::debug!(raw, reason = ?reason, "rejected model name"),
        }
        result
    }

    fn check(&self, name: String) -> Result<ParsedIdentity, RejectReason> {
        if self.lists.contains_extreme(&name) {
            return Err(RejectReason::UnsupportedClass(UnsupportedKind::ExtremeEdition));
        }
        if self.lists.contains_legacy(&name) {
            return Err(RejectReason::UnsupportedClass(UnsupportedKind::LegacyGeneration));
        }

        let family = Family::from_prefix(&name).ok_or(RejectReason::UnrecognizedFamily)?;

        if MOBILE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            return Err(RejectReason::UnsupportedClass(UnsupportedKind::MobileVariant));
        }

        let len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
            return Err(RejectReason::MalformedShape);
        }

        // The family token is ASCII, so byte 2 is a char boundary.
        let remainder = name[family.as_str().len()..]
            .strip_prefix('-')
            .ok_or(RejectReason::MalformedShape)?;

        let digits: String = remainder.chars().filter(char::is_ascii_digit).collect();
        let model_code = digits
            .parse::<u32>()
            .ok()
            .filter(|code| *code > 0)
            .ok_or(RejectReason::MalformedShape)?;

        let suffix = remainder
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect();

        Ok(ParsedIdentity {
            name,
            family,
            model_code,
            suffix,
        })
    }
}
