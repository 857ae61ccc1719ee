//! Main entry point for the parkade CLI.
//!
//! Replays a script of parking lot commands:
//! - `create_parking_lot <capacity>`
//! - `park <registration>`
//! - `leave <registration> <hours>`
//! - `status`
//!
//! `parkade completions <shell>` prints a shell completion script.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
        None => cli.run.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
