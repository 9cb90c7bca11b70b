//! `corespec.toml` configuration.
//!
//! ```toml
//! [reference]
//! extreme-edition = "lists/extreme_edition.txt"
//! legacy = "lists/legacy.txt"
//!
//! [output]
//! format = "text"
//! ```
//!
//! Reference paths are relative to the directory holding the manifest. A
//! list without a configured path falls back to the builtin list.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use corespec_core::reference::load_list;
use corespec_core::{OutputFormat, ReferenceLists};

/// File name searched for when no `--config` is given.
pub const MANIFEST_FILE: &str = "corespec.toml";

/// The top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorespecManifest {
    /// Reference list locations.
    #[serde(default)]
    pub reference: Option<ReferenceConfig>,
    /// Output defaults.
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Reference list section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReferenceConfig {
    /// Extreme Edition / Core-X name list.
    #[serde(default)]
    pub extreme_edition: Option<PathBuf>,
    /// Legacy (first generation) name list.
    #[serde(default)]
    pub legacy: Option<PathBuf>,
}

/// Output section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl CorespecManifest {
    /// Search upward from `start_dir` for `corespec.toml`, parse and return it
    /// along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let manifest = Self::load(&candidate)?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Load a manifest from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing corespec.toml")
    }

    /// The configured default output format.
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    /// Load the reference lists this manifest points at.
    pub fn reference_lists(&self, base_dir: &Path) -> Result<ReferenceLists> {
        let mut lists = ReferenceLists::builtin();
        let Some(reference) = &self.reference else {
            return Ok(lists);
        };
        if let Some(path) = &reference.extreme_edition {
            let path = base_dir.join(path);
            lists.extreme_edition = load_list(&path)
                .with_context(|| format!("loading extreme-edition list {}", path.display()))?;
        }
        if let Some(path) = &reference.legacy {
            let path = base_dir.join(path);
            lists.legacy = load_list(&path)
                .with_context(|| format!("loading legacy list {}", path.display()))?;
        }
        Ok(lists)
    }
}
