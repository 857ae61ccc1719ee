//! Script replay command.
//!
//! Reads commands line by line from a file or stdin, applies them to a
//! fresh parking lot and prints one response per command.

use crate::error::CliError;
use crate::utils::{load_configuration, open_input, replay, GlobalOptions};
use clap::{Args, ValueEnum};
use log::{info, warn};
use parkade::config::LoadedConfig;
use parkade::{Dispatcher, OutputFormat};
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Replay a command script.
#[derive(Args)]
pub struct RunCommand {
    /// Command script to read ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format (overrides configuration)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,
}

/// Output format for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain text messages
    Human,
    /// One JSON object per line
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let LoadedConfig { config, warnings } = load_configuration(global)?;

        // 2. Initialize logging now that the configured level is known
        parkade::init_logger(global.verbose, global.quiet, config.log_mode.as_deref());
        for warning in &warnings {
            warn!("{warning}");
        }

        // 3. Replay the script against a lot that starts uncreated
        let mut dispatcher = Dispatcher::new();
        let format = self.format.map_or_else(|| config.output_format(), Into::into);
        let formatter = format.create_formatter();
        let input = open_input(self.input.as_deref())?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        let summary = replay(input, &mut dispatcher, formatter.as_ref(), &mut out)?;

        info!(
            "processed {} line(s): {} response(s), {} rejected; {} of {} slot(s) occupied",
            summary.lines,
            summary.responses,
            summary.rejected,
            dispatcher.lot().occupied_count(),
            dispatcher.lot().capacity()
        );

        Ok(())
    }
}
