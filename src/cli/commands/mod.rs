//! CLI command implementations

pub mod pack;
