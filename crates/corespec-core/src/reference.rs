//! Reference lists of known-unsupported model names.
//!
//! Lists are plain text with one model name per line. Entries are normalized
//! on load so they compare directly against normalized input. Blank lines and
//! lines starting with `#` are skipped.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::validate::normalize;

const BUILTIN_EXTREME_EDITION: &str = include_str!("../data/extreme_edition.txt");
const BUILTIN_LEGACY: &str = include_str!("../data/legacy.txt");

/// Read-only name lists consulted before any shape checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLists {
    /// Extreme Edition / Core-X parts.
    pub extreme_edition: BTreeSet<String>,
    /// Parts older than the supported generation range.
    pub legacy: BTreeSet<String>,
}

impl ReferenceLists {
    /// Lists bundled with the crate.
    pub fn builtin() -> Self {
        Self {
            extreme_edition: parse_list(BUILTIN_EXTREME_EDITION),
            legacy: parse_list(BUILTIN_LEGACY),
        }
    }

    /// Load both lists from text files.
    pub fn load(extreme_edition: &Path, legacy: &Path) -> Result<Self> {
        Ok(Self {
            extreme_edition: load_list(extreme_edition)?,
            legacy: load_list(legacy)?,
        })
    }

    /// Whether a normalized name is an Extreme Edition part.
    pub fn contains_extreme(&self, name: &str) -> bool {
        self.extreme_edition.contains(name)
    }

    /// Whether a normalized name predates the supported range.
    pub fn contains_legacy(&self, name: &str) -> bool {
        self.legacy.contains(name)
    }

    /// Total number of entries across both lists.
    pub fn len(&self) -> usize {
        self.extreme_edition.len() + self.legacy.len()
    }

    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.extreme_edition.is_empty() && self.legacy.is_empty()
    }
}

/// Load a single list file.
pub fn load_list(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let list = parse_list(&content);
    tracing::debug!(path = %path.display(), entries = list.len(), "loaded reference list");
    Ok(list)
}

/// Parse list text into a set of normalized names.
pub fn parse_list(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(normalize)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
