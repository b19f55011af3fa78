//! Extpack - browser extension packager
//!
//! This library reads the version from an extension's `manifest.json` and
//! bundles the extension files into a versioned zip archive.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Packaging logic
//! - [`infra`] - Infrastructure layer (filesystem, zip output, hashing)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
