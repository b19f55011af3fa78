//! CLI implementation of the packaging run
//!
//! Prints one line per step as the core reports it, then a summary with the
//! absolute archive path.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{status, RULE};
use crate::config::PackConfig;
use crate::core::pack::{pack_project, PackEvent, PackReport};
use crate::error::PackWarning;

/// Execute the packaging run in `path`
pub fn execute(path: &Path) -> Result<()> {
    let config = PackConfig::default();

    let report = pack_project(path, &config, |event| println!("{}", render_event(event)))
        .context("Packaging failed")?;

    for line in render_summary(&report) {
        println!("{line}");
    }
    Ok(())
}

/// Console line for a progress event
pub fn render_event(event: &PackEvent) -> String {
    match event {
        PackEvent::VersionResolved { version } => {
            format!("{} Manifest version: {version}", status::INFO)
        }
        PackEvent::StaleArchiveRemoved { path } => {
            format!("{} Removed old archive: {}", status::SUCCESS, display_name(path))
        }
        PackEvent::ArchiveStarted { path } => {
            format!("{} Creating {} ...", status::INFO, display_name(path))
        }
        PackEvent::EntryAdded { name } => format!("  {} {name}", status::ADDED),
        PackEvent::Warning(warning @ PackWarning::MissingItem { .. }) => {
            format!("  {} {warning}", status::WARNING)
        }
        PackEvent::Warning(warning) => format!("{} {warning}", status::WARNING),
    }
}

/// Closing lines after a successful run
pub fn render_summary(report: &PackReport) -> Vec<String> {
    let mut lines = vec![RULE.to_string()];
    if !report.warnings.is_empty() {
        lines.push(format!(
            "{} {} warning(s) during packaging",
            status::WARNING,
            report.warnings.len()
        ));
    }
    lines.push(format!(
        "{} Packaged {} file(s): {}",
        status::SUCCESS,
        report.entries.len(),
        report.archive_path.display()
    ));
    lines.push(format!("  Size: {} bytes", report.size));
    lines.push(format!("  SHA-256: {}", report.sha256));
    lines
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
