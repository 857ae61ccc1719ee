//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands. Without a subcommand the tool
//! replays a command script.

use crate::commands::{CompletionsCommand, RunCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replay parking lot commands from a file or standard input.
#[derive(Parser)]
#[command(name = "parkade")]
#[command(
    version,
    about = "Run a parking lot from a command script",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load configuration from this YAML file instead of ./parkade.yaml
    #[arg(long, value_name = "PATH", global = true, env = "PARKADE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunCommand,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
