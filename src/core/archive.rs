//! Archive naming and entry planning
//!
//! Turns the configured item list into `(source, archive name)` pairs.
//! Directory items are expanded recursively; the names inside the archive
//! mirror the paths relative to the project root.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// One file to store in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// File on disk
    pub source: PathBuf,
    /// Path inside the archive, `/`-separated
    pub name: String,
}

/// What a configured item resolved to on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPlan {
    /// A regular file stored under its configured name
    File(ArchiveEntry),
    /// Every regular file below a directory
    Directory(Vec<ArchiveEntry>),
    /// Neither a file nor a directory exists
    Missing,
}

impl ItemPlan {
    /// Entries contributed by this item
    pub fn entries(&self) -> &[ArchiveEntry] {
        match self {
            Self::File(entry) => std::slice::from_ref(entry),
            Self::Directory(entries) => entries,
            Self::Missing => &[],
        }
    }
}

/// Archive file name for a product and version
///
/// The version is interpolated as-is; no sanitization happens here.
///
/// # Examples
/// ```
/// use extpack::core::archive::archive_file_name;
///
/// assert_eq!(archive_file_name("my-ext", "1.2.0"), "my-ext-v1.2.0.zip");
/// ```
pub fn archive_file_name(product: &str, version: &str) -> String {
    format!("{product}-v{version}.zip")
}

/// Archive name for a path relative to the project root
pub fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve one configured item against the project root
pub fn plan_item(root: &Path, item: &str) -> Result<ItemPlan, FilesystemError> {
    let path = root.join(item);

    if path.is_file() {
        return Ok(ItemPlan::File(ArchiveEntry {
            source: path,
            name: item.to_string(),
        }));
    }

    if path.is_dir() {
        return collect_directory(root, &path).map(ItemPlan::Directory);
    }

    Ok(ItemPlan::Missing)
}

/// Collect every regular file below `dir`, named relative to `root`
///
/// Order follows the filesystem enumeration. Symlinked files are included;
/// symlinked directories are not descended into.
fn collect_directory(root: &Path, dir: &Path) -> Result<Vec<ArchiveEntry>, FilesystemError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| FilesystemError::WalkDir {
            path: dir.to_path_buf(),
            error: e.to_string(),
        })?;
        if !entry.path().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| FilesystemError::WalkDir {
                path: entry.path().to_path_buf(),
                error: e.to_string(),
            })?;
        entries.push(ArchiveEntry {
            name: entry_name(relative),
            source: entry.path().to_path_buf(),
        });
    }

    tracing::debug!("Found {} file(s) under {}", entries.len(), dir.display());
    Ok(entries)
}
