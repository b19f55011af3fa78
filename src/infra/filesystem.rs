//! Filesystem operations
//!
//! Handles file reads and removals.

use std::path::Path;

use crate::error::FilesystemError;

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove an archive left over from a previous run
///
/// Returns `Ok(true)` if something was removed and `Ok(false)` if nothing
/// existed at `path`.
pub fn remove_stale_archive(path: &Path) -> Result<bool, FilesystemError> {
    // symlink_metadata so a dangling link still counts as present
    if std::fs::symlink_metadata(path).is_err() {
        return Ok(false);
    }

    std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    tracing::debug!("Removed stale archive {}", path.display());
    Ok(true)
}
