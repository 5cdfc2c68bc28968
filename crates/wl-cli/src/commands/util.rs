//! Shared utilities for CLI commands.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use wl_core::{LineStats, ParseOptions, TimeSheet, TimeSheetBuilder};

use crate::{Config, InputArgs};

/// A work log read into memory, with a name for error messages.
#[derive(Debug)]
pub struct Input {
    pub source: String,
    pub text: String,
}

/// Reads the log from `path`, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Input {
                source: path.display().to_string(),
                text,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(Input {
                source: "<stdin>".to_string(),
                text,
            })
        }
    }
}

/// Parses an input into a time sheet, also returning per-kind line counts.
pub fn parse_input(input: &Input, options: ParseOptions) -> Result<(TimeSheet, LineStats)> {
    let mut builder = TimeSheetBuilder::new(options);
    for (idx, line) in input.text.lines().enumerate() {
        builder
            .push_line(idx + 1, line)
            .with_context(|| format!("invalid work log {}", input.source))?;
    }
    let stats = builder.stats();
    tracing::debug!(source = %input.source, ?stats, "parsed work log");
    Ok((builder.finish(), stats))
}

/// Reads and parses the log named by `args`.
pub fn load_sheet(args: &InputArgs, config: &Config) -> Result<(TimeSheet, LineStats)> {
    let input = read_input(args.path.as_deref())?;
    let options = ParseOptions {
        strict: args.strict || config.strict,
    };
    parse_input(&input, options)
}
