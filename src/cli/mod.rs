//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

/// Version string with build provenance
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    ")"
);

/// Extpack - browser extension packager
///
/// Reads the version from ./manifest.json and writes the extension files
/// into a versioned zip archive in the current directory.
#[derive(Parser, Debug)]
#[command(name = "extpack")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the packaging run in the current directory
    pub fn run(self) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        commands::pack::execute(&current_dir)
    }
}
