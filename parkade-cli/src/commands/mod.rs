//! CLI command implementations.
//!
//! - `run`: replay a command script (the default when no subcommand is given)
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod run;

pub use completions::CompletionsCommand;
pub use run::RunCommand;
