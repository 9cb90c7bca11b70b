//! corespec CLI — identify Intel Core desktop CPUs from their model names.

mod commands;
mod manifest;
mod telemetry;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use corespec_core::OutputFormat;
use manifest::CorespecManifest;

#[derive(Parser)]
#[command(
    name = "corespec",
    version,
    about = "Derive Intel Core desktop CPU specifications from model names"
)]
struct Cli {
    /// Configuration file (default: nearest corespec.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify model names such as i7-6700K
    Classify {
        /// Model names
        #[arg(required = true)]
        names: Vec<String>,
        /// Output format (text, json, toml)
        #[arg(long)]
        format: Option<String>,
        /// Write results to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Append to the output file if it already exists
        #[arg(long, requires = "output")]
        append: bool,
    },
    /// Prompt for model names until end of input
    Interactive {
        /// Output format (text, json, toml)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show the active reference lists
    Lists {
        /// Only show one list (extreme, legacy)
        #[arg(long)]
        kind: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json, cli.log_level);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (manifest, base_dir) = load_manifest(cli.config.as_deref(), &cwd)?;
    let lists = manifest.reference_lists(&base_dir)?;
    tracing::info!(
        extreme_edition = lists.extreme_edition.len(),
        legacy = lists.legacy.len(),
        "reference lists loaded"
    );

    match cli.command {
        Commands::Classify {
            names,
            format,
            output,
            append,
        } => {
            let format = resolve_format(format.as_deref(), &manifest)?;
            commands::classify::run(&names, &lists, format, output.as_deref(), append)
        }

        Commands::Interactive { format } => {
            let format = resolve_format(format.as_deref(), &manifest)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let classified =
                commands::interactive::run(stdin.lock(), stdout.lock(), &lists, format)?;
            tracing::info!(classified, "interactive session ended");
            Ok(())
        }

        Commands::Lists { kind } => commands::lists::run(&lists, kind.as_deref()),
    }
}

/// Load the explicit config file, or search upward from `cwd`.
///
/// Returns the manifest and the directory its relative paths resolve against.
fn load_manifest(config: Option<&Path>, cwd: &Path) -> Result<(CorespecManifest, PathBuf)> {
    if let Some(path) = config {
        let manifest = CorespecManifest::load(path)?;
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        return Ok((manifest, cwd.join(dir)));
    }
    match CorespecManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => {
            tracing::debug!(dir = %dir.display(), "using corespec.toml");
            Ok((manifest, dir))
        }
        None => Ok((CorespecManifest::default(), cwd.to_path_buf())),
    }
}

/// Pick the output format: command-line flag, then config, then text.
fn resolve_format(flag: Option<&str>, manifest: &CorespecManifest) -> Result<OutputFormat> {
    match flag {
        Some(name) => name
            .parse()
            .with_context(|| format!("invalid --format '{name}'")),
        None => Ok(manifest.default_format().unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_classify() {
        let cli = Cli::try_parse_from([
            "corespec", "classify", "i7-6700K", "i5-8400", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Classify { names, format, .. } => {
                assert_eq!(names, ["i7-6700K", "i5-8400"]);
                assert_eq!(format.as_deref(), Some("json"));
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn log_level_is_typed() {
        let cli = Cli::try_parse_from(["corespec", "--log-level", "debug", "lists"]).unwrap();
        assert_eq!(cli.log_level, Level::DEBUG);
        let cli = Cli::try_parse_from(["corespec", "lists"]).unwrap();
        assert_eq!(cli.log_level, Level::WARN);
        assert!(Cli::try_parse_from(["corespec", "--log-level", "verbose", "lists"]).is_err());
    }

    #[test]
    fn append_requires_output() {
        assert!(Cli::try_parse_from(["corespec", "classify", "i7-6700k", "--append"]).is_err());
    }

    #[test]
    fn format_precedence() {
        let manifest = CorespecManifest::from_str("[output]\nformat = \"toml\"\n").unwrap();
        assert_eq!(resolve_format(Some("json"), &manifest).unwrap(), OutputFormat::Json);
        assert_eq!(resolve_format(None, &manifest).unwrap(), OutputFormat::Toml);
        assert_eq!(
            resolve_format(None, &CorespecManifest::default()).unwrap(),
            OutputFormat::Text
        );
        assert!(resolve_format(Some("yaml"), &manifest).is_err());
    }

    #[test]
    fn explicit_config_resolves_relative_to_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("xe.txt"), "i7-6700k\n").unwrap();
        let config = dir.path().join("custom.toml");
        std::fs::write(&config, "[reference]\nextreme-edition = \"xe.txt\"\n").unwrap();

        let (manifest, base) = load_manifest(Some(&config), Path::new("/")).unwrap();
        let lists: corespec_core::ReferenceLists = manifest.reference_lists(&base).unwrap();
        assert!(lists.contains_extreme("i7-6700k"));
    }
}
