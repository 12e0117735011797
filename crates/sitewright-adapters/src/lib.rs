//! Infrastructure adapters for Sitewright.
//!
//! This crate implements the ports defined in `sitewright-core::application::ports`
//! and ships the built-in content catalog. It contains all external I/O.

pub mod builtin_content;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_content::builtin_library;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
