//! Default configuration values

/// Product name used in the archive file name
pub const PRODUCT_NAME: &str = "Video-skipping-and-anime-TV-series-tracking-assistant";

/// Manifest location relative to the project root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Version used when the manifest has no `version` field
pub const UNKNOWN_VERSION: &str = "unknown";

/// Files and directories packaged into the archive, in order
pub const PACKAGE_ITEMS: &[&str] = &[
    "manifest.json",
    "background.js",
    "content.js",
    "popup.html",
    "popup.js",
    "options.html",
    "options.js",
    "icon.png",
    "README.md",
    "_locales",
];

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
