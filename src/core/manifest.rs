//! Extension manifest (manifest.json) reading
//!
//! Only the `version` field is consulted. The rest of the document is
//! accepted as-is without schema validation.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::PackError;
use crate::infra::filesystem;

/// Extract the version string from manifest JSON text
///
/// The document root must be a JSON object. A string `version` is returned
/// verbatim; other non-null values are rendered as their JSON text. A missing
/// or `null` version yields `fallback`.
///
/// # Examples
/// ```
/// use extpack::core::manifest::version_from_json;
///
/// assert_eq!(version_from_json(r#"{"version": "1.2.0"}"#, "unknown").unwrap(), "1.2.0");
/// assert_eq!(version_from_json("{}", "unknown").unwrap(), "unknown");
/// ```
pub fn version_from_json(content: &str, fallback: &str) -> Result<String, serde_json::Error> {
    let document: Map<String, Value> = serde_json::from_str(content)?;

    let version = match document.get("version") {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(version)) => version.clone(),
        Some(other) => other.to_string(),
    };
    Ok(version)
}

/// Read the manifest at `path` and return its version
///
/// Fails with [`PackError::MissingManifest`] if the file does not exist and
/// [`PackError::ManifestParse`] if it cannot be read or parsed.
pub fn read_version(path: &Path, fallback: &str) -> Result<String, PackError> {
    if !path.exists() {
        return Err(PackError::MissingManifest {
            path: path.to_path_buf(),
        });
    }

    let content = filesystem::read_file(path).map_err(|e| PackError::ManifestParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let version = version_from_json(&content, fallback).map_err(|e| PackError::ManifestParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::debug!("Manifest {} declares version {version}", path.display());
    Ok(version)
}
