//! Output formatting
//!
//! Plain, line-oriented console output. Tracing goes to stderr; everything
//! meant for the user goes to stdout.

use tracing::Level;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";

    /// Added archive entry
    pub const ADDED: &str = "+";
}

/// Separator printed before the final summary
pub const RULE: &str = "------------------------------";

/// Tracing level for a `-v` count
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Format a fatal error with its cause chain
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} Error: {error:#}", status::ERROR)
}

/// Print a fatal error for the user
pub fn display_error(error: &anyhow::Error) {
    println!("{}", format_error(error));
}
