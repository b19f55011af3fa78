//! Packaging orchestration
//!
//! Runs the full packaging sequence: read the manifest version, name the
//! archive, remove a stale copy, then add every configured item.
//!
//! Prerequisite steps fail the run through [`PackError`]. Best-effort steps
//! produce a [`StepOutcome`], so a warning is reported and the run goes on.

use std::path::{Path, PathBuf};

use crate::config::PackConfig;
use crate::core::archive::{self, ArchiveEntry, ItemPlan};
use crate::core::manifest;
use crate::error::{PackError, PackWarning};
use crate::infra::digest;
use crate::infra::filesystem;
use crate::infra::zip_writer::ZipArchiveWriter;

/// Result of a best-effort step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    /// The step completed
    Done(T),
    /// The step failed in a way that does not stop the run
    Warned(PackWarning),
}

/// Progress notifications emitted while packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackEvent {
    /// The manifest was read
    VersionResolved { version: String },
    /// A previous archive at the output path was deleted
    StaleArchiveRemoved { path: PathBuf },
    /// The output archive was opened for writing
    ArchiveStarted { path: PathBuf },
    /// A file was stored in the archive
    EntryAdded { name: String },
    /// A best-effort step failed
    Warning(PackWarning),
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// Absolute path of the produced archive
    pub archive_path: PathBuf,
    /// Version read from the manifest (or the fallback)
    pub version: String,
    /// Archive entry names in write order
    pub entries: Vec<String>,
    /// Non-fatal problems encountered
    pub warnings: Vec<PackWarning>,
    /// Archive size in bytes
    pub size: u64,
    /// Lowercase hex SHA-256 of the archive
    pub sha256: String,
}

/// Package the project at `root` according to `config`
///
/// `observe` is called for every step as it happens.
pub fn pack_project<F>(
    root: &Path,
    config: &PackConfig,
    mut observe: F,
) -> Result<PackReport, PackError>
where
    F: FnMut(&PackEvent),
{
    let manifest_path = root.join(&config.manifest_path);
    let version = manifest::read_version(&manifest_path, &config.fallback_version)?;
    observe(&PackEvent::VersionResolved {
        version: version.clone(),
    });

    let archive_path = absolute_path(&root.join(archive::archive_file_name(
        &config.product_name,
        &version,
    )));
    tracing::info!("Packaging version {version} into {}", archive_path.display());

    let mut warnings = Vec::new();
    match remove_stale_archive(&archive_path) {
        StepOutcome::Done(true) => observe(&PackEvent::StaleArchiveRemoved {
            path: archive_path.clone(),
        }),
        StepOutcome::Done(false) => {}
        StepOutcome::Warned(warning) => {
            observe(&PackEvent::Warning(warning.clone()));
            warnings.push(warning);
        }
    }

    let mut writer = ZipArchiveWriter::create(&archive_path)?;
    observe(&PackEvent::ArchiveStarted {
        path: archive_path.clone(),
    });

    let mut entries = Vec::new();
    for item in &config.items {
        let plan = match plan_item(root, item, &archive_path)? {
            StepOutcome::Done(plan) => plan,
            StepOutcome::Warned(warning) => {
                observe(&PackEvent::Warning(warning.clone()));
                warnings.push(warning);
                continue;
            }
        };

        for ArchiveEntry { source, name } in plan.entries() {
            writer.add_file(source, name)?;
            observe(&PackEvent::EntryAdded { name: name.clone() });
            entries.push(name.clone());
        }
    }

    let size = writer.finish()?;
    let sha256 =
        digest::sha256_file(&archive_path).map_err(|e| PackError::archive_write(&archive_path, e))?;
    tracing::info!("Wrote {} entries ({size} bytes)", entries.len());

    Ok(PackReport {
        archive_path,
        version,
        entries,
        warnings,
        size,
        sha256,
    })
}

/// Delete an earlier archive at `path`, reporting failure as a warning
pub fn remove_stale_archive(path: &Path) -> StepOutcome<bool> {
    match filesystem::remove_stale_archive(path) {
        Ok(removed) => StepOutcome::Done(removed),
        Err(e) => {
            tracing::info!("Stale archive not removed: {e}");
            StepOutcome::Warned(PackWarning::StaleArchiveRemoval {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}

/// Resolve an item, turning a missing item into a warning
///
/// Traversal failures are fatal and attributed to the archive being written.
fn plan_item(
    root: &Path,
    item: &str,
    archive_path: &Path,
) -> Result<StepOutcome<ItemPlan>, PackError> {
    match archive::plan_item(root, item) {
        Ok(ItemPlan::Missing) => {
            tracing::info!("Configured item {item} not found under {}", root.display());
            Ok(StepOutcome::Warned(PackWarning::MissingItem {
                item: item.to_string(),
            }))
        }
        Ok(plan) => Ok(StepOutcome::Done(plan)),
        Err(e) => Err(PackError::archive_write(archive_path, e)),
    }
}

/// Make `path` absolute against the current directory without resolving links
fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
}
