//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sitewright-adapters` crate provides implementations.

use crate::error::SitewrightResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sitewright_adapters::filesystem::LocalFilesystem` (production)
/// - `sitewright_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` truncates: generating over an existing site replaces files
///   in place rather than failing
/// - Directories are created with all parents in one call
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SitewrightResult<()>;

    /// Write content to a file, replacing it if it already exists.
    fn write_file(&self, path: &Path, content: &str) -> SitewrightResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SitewrightResult<()>;
}
