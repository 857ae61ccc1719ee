//! Library exports for parkade-cli.
//!
//! This module exports the CLI structure and the script runner so they can
//! be exercised from tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
