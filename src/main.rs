//! Extpack CLI - browser extension packager
//!
//! Entry point for the extpack command-line application.

use clap::Parser;

use extpack::cli::output::{display_error, log_level};
use extpack::cli::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(log_level(cli.verbose).into()),
        )
        .init();

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
