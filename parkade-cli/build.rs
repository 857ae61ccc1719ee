//! Build script for parkade-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("parkade")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a parking lot from a command script")
        .long_about(
            "Replay create_parking_lot, park, leave and status commands from a file or \
             standard input, printing one response per command",
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Command script to read (\"-\" or omitted for stdin)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .value_parser(["human", "json"])
                .help("Output format (overrides configuration)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load configuration from this YAML file instead of ./parkade.yaml")
                .value_name("PATH")
                .global(true)
                .env("PARKADE_CONFIG"),
        )
        .subcommands(vec![Command::new("completions")
            .about("Generate shell completion scripts")
            .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell")])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("parkade.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
