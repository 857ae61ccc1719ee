//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared by commands: configuration
//! loading, opening the input script, and replaying it through a
//! dispatcher.

use crate::error::CliError;
use parkade::config::LoadedConfig;
use parkade::{ConfigBuilder, Dispatcher, OutputFormatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `--config` file, or `parkade.yaml` in the current directory
/// 3. User configuration file
/// 4. Built-in defaults (lowest priority)
///
/// Discovered files that cannot be used come back as warnings.
pub fn load_configuration(global: &GlobalOptions) -> Result<LoadedConfig, CliError> {
    ConfigBuilder::new()
        .with_config_file(global.config.clone())
        .load()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the input script. `None` or `-` means standard input.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.is_dir() => Err(CliError::InvalidArguments(format!(
            "input {} is a directory",
            p.display()
        ))),
        Some(p) => {
            let file = File::open(p).map_err(|source| CliError::InputUnavailable {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Counts gathered while replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Responses written.
    pub responses: usize,
    /// Lines rejected as malformed.
    pub rejected: usize,
}

/// Feed every line of `input` to `dispatcher`, writing one formatted
/// response per non-blank line to `out`.
///
/// Lines that are not valid UTF-8 are decoded lossily. A read or write
/// failure stops the replay.
pub fn replay<R: BufRead, W: Write>(
    input: R,
    dispatcher: &mut Dispatcher,
    formatter: &dyn OutputFormatter,
    out: &mut W,
) -> Result<ReplaySummary, CliError> {
    let mut summary = ReplaySummary::default();

    for line in input.split(b'\n') {
        let line = line?;
        summary.lines += 1;

        let text = String::from_utf8_lossy(&line);
        let Some(response) = dispatcher.execute(&text) else {
            continue;
        };

        if response.is_rejected() {
            summary.rejected += 1;
        }
        writeln!(out, "{}", formatter.format(&response)?)?;
        summary.responses += 1;
    }

    out.flush()?;
    Ok(summary)
}
