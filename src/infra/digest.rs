//! SHA-256 digests of produced archives

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::FilesystemError;

/// Compute the lowercase hex SHA-256 digest of a file
pub fn sha256_file(path: &Path) -> Result<String, FilesystemError> {
    let read_error = |e: std::io::Error| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = file.read(&mut buffer).map_err(read_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(hex::encode(hasher.finalize()))
}
