//! Rendering of specification records.
//!
//! The text form is the labeled block printed by the CLI and appended to
//! output files; JSON and TOML forms serialize the record directly. A batch
//! of records always renders as one document: a JSON array, or a TOML array
//! of `[[cpu]]` tables.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::specification::Specification;

/// Output encoding for specification records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "human" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(CatalogError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a record in the requested format.
pub fn render(spec: &Specification, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(spec)),
        OutputFormat::Json => render_json(spec),
        OutputFormat::Toml => render_toml(spec),
    }
}

/// Several records wrapped as a single TOML document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Batch {
    /// One `[[cpu]]` table per record, in input order.
    #[serde(default)]
    pub cpu: Vec<Specification>,
}

/// Render a batch of records as one document.
///
/// Text blocks are separated by a blank line.
pub fn render_batch(specs: &[Specification], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(specs
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(specs)?),
        OutputFormat::Toml => {
            let batch = Batch {
                cpu: specs.to_vec(),
            };
            Ok(toml::to_string_pretty(&batch)?)
        }
    }
}

/// Render the labeled text block.
///
/// Example:
/// ```text
/// Processing input...
/// Printing results for Intel Core i7-6700k:
///
/// Generation: 6
/// Lithography: 14nm
/// ...
/// Architecture: Skylake
/// ```
pub fn render_text(spec: &Specification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Processing input...");
    let _ = writeln!(out, "Printing results for Intel Core {}:", spec.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Generation: {}", spec.generation);
    let _ = writeln!(out, "Lithography: {}nm", spec.lithography_nm);
    let _ = writeln!(out, "Core count: {}", spec.core_count);
    let _ = writeln!(out, "Unlocked: {}", spec.unlocked);
    let _ = writeln!(out, "Has Turbo Boost: {}", spec.has_turbo);
    let _ = writeln!(out, "Has iGPU: {}", spec.has_igpu);
    let _ = writeln!(out, "Has hyperthreading: {}", spec.has_smt);
    let _ = writeln!(out, "Socket: {}", spec.socket_label());
    let _ = writeln!(out, "Family: Core {}", spec.family);
    let _ = writeln!(out, "Tier: {}", spec.tier);
    let _ = writeln!(out, "Architecture: {}", spec.architecture_label());
    out
}

/// Render as pretty-printed JSON.
pub fn render_json(spec: &Specification) -> Result<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// Render as pretty-printed TOML.
pub fn render_toml(spec: &Specification) -> Result<String> {
    Ok(toml::to_string_pretty(spec)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify, ReferenceLists};

    fn skylake() -> Specification {
        classify("i7-6700K", &ReferenceLists::builtin()).unwrap()
    }

    #[test]
    fn text_block() {
        let expected = "\
Processing input...
Printing results for Intel Core i7-6700k:

Generation: 6
Lithography: 14nm
Core count: 4
Unlocked: true
Has Turbo Boost: true
Has iGPU: true
Has hyperthreading: true
Socket: LGA1151
Family: Core i7
Tier: Performance
Architecture: Skylake
";
        assert_eq!(render_text(&skylake()), expected);
    }

    #[test]
    fn text_block_sentinels() {
        let mut spec = skylake();
        spec.socket = None;
        spec.architecture = None;
        let text = render_text(&spec);
        assert!(text.contains("Socket: N/A\n"));
        assert!(text.contains("Architecture: N/A\n"));
    }

    #[test]
    fn json_round_trip() {
        let spec = skylake();
        let json = render_json(&spec).unwrap();
        assert!(json.contains("\"lithography-nm\": 14"));
        assert!(json.contains("\"architecture\": \"Skylake\""));
        let parsed: Specification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn toml_output() {
        let toml_str = render_toml(&skylake()).unwrap();
        assert!(toml_str.contains("socket = \"LGA1151\""));
        assert!(toml_str.contains("family = \"i7\""));
        let parsed: Specification = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, skylake());
    }

    #[test]
    fn format_names() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("toml".parse::<OutputFormat>().unwrap(), OutputFormat::Toml);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(CatalogError::UnknownFormat(_))
        ));
    }

    #[test]
    fn json_batch_is_one_array() {
        let lists = ReferenceLists::builtin();
        let specs = vec![skylake(), classify("i5-8400", &lists).unwrap()];
        let json = render_batch(&specs, OutputFormat::Json).unwrap();
        let parsed: Vec<Specification> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, specs);
    }

    #[test]
    fn toml_batch_is_one_document() {
        let lists = ReferenceLists::builtin();
        let specs = vec![skylake(), classify("i9-11900", &lists).unwrap()];
        let toml_str = render_batch(&specs, OutputFormat::Toml).unwrap();
        assert_eq!(toml_str.matches("[[cpu]]").count(), 2);
        let parsed: Batch = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.cpu, specs);
    }

    #[test]
    fn text_batch_separated_by_blank_line() {
        let lists = ReferenceLists::builtin();
        let specs = vec![skylake(), classify("i5-8400", &lists).unwrap()];
        let text = render_batch(&specs, OutputFormat::Text).unwrap();
        assert!(text.contains("Architecture: Skylake\n\nProcessing input...\nPrinting results for Intel Core i5-8400:"));
        assert_eq!(render_batch(&[], OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn render_dispatches() {
        let spec = skylake();
        assert_eq!(render(&spec, OutputFormat::Text).unwrap(), render_text(&spec));
        assert!(render(&spec, OutputFormat::Json).unwrap().starts_with('{'));
    }
}
