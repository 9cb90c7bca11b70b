//! `corespec classify` — classify one or more model names.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use corespec_core::format::render_batch;
use corespec_core::{classify, OutputFormat, ReferenceLists, RejectReason, Specification};

/// Outcome of classifying a batch of names.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Accepted records, in input order.
    pub specs: Vec<Specification>,
    /// Rejected names with their reasons, in input order.
    pub rejected: Vec<(String, RejectReason)>,
}

/// Classify every name.
pub fn classify_batch(names: &[String], lists: &ReferenceLists) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for name in names {
        match classify(name, lists) {
            Ok(spec) => outcome.specs.push(spec),
            Err(reason) => outcome.rejected.push((name.clone(), reason)),
        }
    }
    outcome
}

/// Write a rendered batch to `path`, followed by a blank line.
///
/// Nothing is created when `document` is empty. An existing file is only
/// written when `append` is set; it is never truncated. JSON arrays cannot
/// be concatenated, so JSON is never appended to a non-empty file.
///
/// Returns whether anything was written.
pub fn write_document(
    path: &Path,
    document: &str,
    format: OutputFormat,
    append: bool,
) -> Result<bool> {
    if document.is_empty() {
        return Ok(false);
    }

    let mut options = OpenOptions::new();
    if append {
        if format == OutputFormat::Json && std::fs::metadata(path).is_ok_and(|m| m.len() > 0) {
            bail!(
                "cannot append JSON to non-empty '{}'; choose a new file",
                path.display()
            );
        }
        options.create(true).append(true);
    } else {
        options.create_new(true).write(true);
    }

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => bail!(
            "'{}' already exists; pass --append to add the results to the end of it",
            path.display()
        ),
        Err(e) => return Err(e).with_context(|| format!("opening {}", path.display())),
    };
    writeln!(file, "{}\n", document.trim_end_matches('\n'))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}

/// Run the command.
pub fn run(
    names: &[String],
    lists: &ReferenceLists,
    format: OutputFormat,
    output: Option<&Path>,
    append: bool,
) -> Result<()> {
    let outcome = classify_batch(names, lists);

    for (name, reason) in &outcome.rejected {
        tracing::info!(name = %name, reason = ?reason, "name rejected");
        eprintln!("{name}: {reason}");
    }

    let document = if outcome.specs.is_empty() {
        String::new()
    } else {
        render_batch(&outcome.specs, format)?
    };

    match output {
        Some(path) => {
            if write_document(path, &document, format, append)? {
                println!("Printed to file \"{}\".", path.display());
            }
        }
        None => {
            if !document.is_empty() {
                println!("{}", document.trim_end_matches('\n'));
            }
        }
    }

    if !outcome.rejected.is_empty() {
        bail!(
            "{} of {} name(s) rejected",
            outcome.rejected.len(),
            names.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corespec_core::format::Batch;
    use corespec_core::UnsupportedKind;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn batch_splits_accepted_and_rejected() {
        let outcome = classify_batch(
            &names(&["i7-6700K", "i7-8750hq", "i5-8400"]),
            &ReferenceLists::builtin(),
        );
        assert_eq!(outcome.specs.len(), 2);
        assert_eq!(outcome.specs[0].name, "i7-6700k");
        assert_eq!(outcome.specs[1].core_count, 6);
        assert_eq!(
            outcome.rejected,
            vec![(
                "i7-8750hq".to_string(),
                RejectReason::UnsupportedClass(UnsupportedKind::MobileVariant)
            )]
        );
    }

    #[test]
    fn write_creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cpus.txt");
        assert!(write_document(&path, "a\nb\n", OutputFormat::Text, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n\n");
    }

    #[test]
    fn empty_document_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cpus.txt");
        assert!(!write_document(&path, "", OutputFormat::Text, false).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn existing_file_requires_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cpus.txt");
        std::fs::write(&path, "previous\n\n").unwrap();

        let err = write_document(&path, "new\n", OutputFormat::Text, false).unwrap_err();
        assert!(err.to_string().contains("--append"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous\n\n");

        write_document(&path, "new\n", OutputFormat::Text, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous\n\nnew\n\n");
    }

    #[test]
    fn json_not_appended_to_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cpus.json");
        std::fs::write(&path, "[]\n").unwrap();
        assert!(write_document(&path, "[]", OutputFormat::Json, true).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn all_rejected_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let result = run(
            &names(&["athlon"]),
            &ReferenceLists::builtin(),
            OutputFormat::Text,
            Some(&path),
            false,
        );
        assert!(result.is_err());
        assert!(!path.exists());

        // The path stays usable without --append.
        run(
            &names(&["i7-6700k"]),
            &ReferenceLists::builtin(),
            OutputFormat::Text,
            Some(&path),
            false,
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn run_fails_when_any_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let result = run(
            &names(&["i7-6700k", "athlon"]),
            &ReferenceLists::builtin(),
            OutputFormat::Text,
            Some(&path),
            false,
        );
        assert!(result.is_err());
        // Accepted names are still written, in the same form as the prompt loop.
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Processing input...\nPrinting results for Intel Core i7-6700k:"));
    }

    #[test]
    fn toml_batch_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");
        run(
            &names(&["i7-6700k", "i5-8400"]),
            &ReferenceLists::builtin(),
            OutputFormat::Toml,
            Some(&path),
            false,
        )
        .unwrap();
        run(
            &names(&["i9-11900"]),
            &ReferenceLists::builtin(),
            OutputFormat::Toml,
            Some(&path),
            true,
        )
        .unwrap();

        let batch: Batch = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let names: Vec<&str> = batch.cpu.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["i7-6700k", "i5-8400", "i9-11900"]);
    }

    #[test]
    fn json_batch_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        run(
            &names(&["i9-11900", "i7-6700f"]),
            &ReferenceLists::builtin(),
            OutputFormat::Json,
            Some(&path),
            false,
        )
        .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let specs: Vec<Specification> = serde_json::from_str(&written).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].architecture_label(), "Rocket Lake");
        assert!(!specs[1].has_igpu);
    }
}
