//! Configuration and constants
//!
//! The packaging inputs are fixed at build time; [`PackConfig`] bundles them
//! so the core logic can be exercised against other item lists in tests.

pub mod defaults;

use std::path::PathBuf;

use defaults::{MANIFEST_FILE, PACKAGE_ITEMS, PRODUCT_NAME, UNKNOWN_VERSION};

/// Inputs for a single packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Product name interpolated into the archive name
    pub product_name: String,
    /// Manifest path relative to the project root
    pub manifest_path: PathBuf,
    /// Items to package, relative to the project root
    pub items: Vec<String>,
    /// Version substituted when the manifest has none
    pub fallback_version: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            manifest_path: PathBuf::from(MANIFEST_FILE),
            items: PACKAGE_ITEMS.iter().map(|item| (*item).to_string()).collect(),
            fallback_version: UNKNOWN_VERSION.to_string(),
        }
    }
}

impl PackConfig {
    /// Replace the item list
    #[must_use]
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }
}
