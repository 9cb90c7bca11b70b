//! `corespec lists` — show the active reference lists.

use std::collections::BTreeSet;

use anyhow::{bail, Result};

use corespec_core::ReferenceLists;

/// Which reference list to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    ExtremeEdition,
    Legacy,
}

impl ListKind {
    /// Parse a `--kind` value.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "extreme" | "extreme-edition" => Ok(ListKind::ExtremeEdition),
            "legacy" | "old" => Ok(ListKind::Legacy),
            other => bail!("unknown list '{other}' (expected extreme or legacy)"),
        }
    }
}

/// Render one list section.
fn section(title: &str, names: &BTreeSet<String>) -> String {
    let mut out = format!("{title} ({} names):\n", names.len());
    for name in names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Render the requested lists, or both when `kind` is `None`.
pub fn render(lists: &ReferenceLists, kind: Option<ListKind>) -> String {
    let mut sections = Vec::new();
    if matches!(kind, None | Some(ListKind::ExtremeEdition)) {
        sections.push(section("Extreme Edition / Core-X", &lists.extreme_edition));
    }
    if matches!(kind, None | Some(ListKind::Legacy)) {
        sections.push(section("Legacy", &lists.legacy));
    }
    sections.join("\n")
}

/// Run the command.
pub fn run(lists: &ReferenceLists, kind: Option<&str>) -> Result<()> {
    let kind = kind.map(ListKind::parse).transpose()?;
    print!("{}", render(lists, kind));
    Ok(())
}
