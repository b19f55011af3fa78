//! Core business logic module
//!
//! This module contains the packaging logic for extpack. Raw file access
//! lives in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`manifest`] - Reading the version from manifest.json
//! - [`archive`] - Archive naming and entry planning
//! - [`pack`] - The packaging sequence and its step outcomes

pub mod archive;
pub mod manifest;
pub mod pack;
