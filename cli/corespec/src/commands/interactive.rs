//! `corespec interactive` — prompt for names until the input ends.
//!
//! Rejected names are reported and the prompt repeats. `quit` or `exit`
//! ends the session, as does end of input.

use std::io::{BufRead, Write};

use anyhow::Result;

use corespec_core::format::render;
use corespec_core::{classify, OutputFormat, ReferenceLists};

const PROMPT: &str = "Enter a modern Intel Core mainstream desktop CPU name, e.g. i7-8700K. Include a hyphen.";

/// Run the prompt loop over arbitrary input and output streams.
///
/// Returns the number of names classified successfully.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    lists: &ReferenceLists,
    format: OutputFormat,
) -> Result<usize> {
    let mut classified = 0;
    writeln!(output, "{PROMPT}")?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if matches!(name.to_ascii_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        match classify(name, lists) {
            Ok(spec) => {
                writeln!(output, "{}", render(&spec, format)?.trim_end_matches('\n'))?;
                writeln!(output)?;
                classified += 1;
            }
            Err(reason) => {
                tracing::debug!(name, reason = ?reason, "re-prompting");
                writeln!(output, "{reason}. Try again.")?;
            }
        }
    }

    Ok(classified)
}
