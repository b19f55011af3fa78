//! Infrastructure layer
//!
//! Handles filesystem access, archive output and hashing.

pub mod digest;
pub mod filesystem;
pub mod zip_writer;
