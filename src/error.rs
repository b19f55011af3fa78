//! Error types for extpack
//!
//! Domain-specific error types using thiserror. Fatal failures are
//! [`PackError`]; best-effort steps report [`PackWarning`] and carry on.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to walk a directory tree
    #[error("Failed to traverse '{path}': {error}")]
    WalkDir { path: PathBuf, error: String },
}

/// Non-fatal conditions reported while packaging
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackWarning {
    /// A previous archive exists but could not be deleted
    #[error("Could not remove old archive '{path}': {reason}")]
    StaleArchiveRemoval { path: PathBuf, reason: String },

    /// A configured file or directory does not exist
    #[error("Missing item, skipped: {item}")]
    MissingItem { item: String },
}

/// Top-level extpack error type
#[derive(Error, Debug)]
pub enum PackError {
    /// Manifest not found
    #[error("Manifest not found at '{path}'")]
    MissingManifest { path: PathBuf },

    /// Manifest could not be read or parsed
    #[error("Failed to read manifest '{path}': {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// Writing or finalizing the archive failed
    #[error("Failed to write archive '{path}': {reason}")]
    ArchiveWrite { path: PathBuf, reason: String },
}

impl PackError {
    /// Build an [`PackError::ArchiveWrite`] from any displayable cause
    pub fn archive_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ArchiveWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
