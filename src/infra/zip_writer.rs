//! Zip archive output
//!
//! Thin wrapper over [`zip::ZipWriter`] that stores every entry with
//! deflate compression and maps failures to [`PackError::ArchiveWrite`].

use std::fs::File;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackError;

/// An archive being written to disk
pub struct ZipArchiveWriter {
    path: PathBuf,
    inner: ZipWriter<File>,
    options: SimpleFileOptions,
}

impl ZipArchiveWriter {
    /// Create (or truncate) the archive at `path`
    pub fn create(path: &Path) -> Result<Self, PackError> {
        let file = File::create(path).map_err(|e| PackError::archive_write(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: ZipWriter::new(file),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        })
    }

    /// Copy `source` into the archive under `name`
    pub fn add_file(&mut self, source: &Path, name: &str) -> Result<(), PackError> {
        let mut reader = File::open(source).map_err(|e| {
            PackError::archive_write(&self.path, format!("{}: {e}", source.display()))
        })?;
        self.inner
            .start_file(name, self.options)
            .map_err(|e| PackError::archive_write(&self.path, e))?;
        std::io::copy(&mut reader, &mut self.inner).map_err(|e| {
            PackError::archive_write(&self.path, format!("{}: {e}", source.display()))
        })?;
        tracing::trace!("Stored {} as {name}", source.display());
        Ok(())
    }

    /// Write the central directory and close the file
    ///
    /// Returns the final archive size in bytes.
    pub fn finish(self) -> Result<u64, PackError> {
        let file = self
            .inner
            .finish()
            .map_err(|e| PackError::archive_write(&self.path, e))?;
        let size = file
            .metadata()
            .map_err(|e| PackError::archive_write(&self.path, e))?
            .len();
        Ok(size)
    }
}
