//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sitewright_core::{application::ports::Filesystem, error::SitewrightResult};

/// Production filesystem implementation using `std::fs`.
///
/// `write_file` goes through `std::fs::write`, which truncates, so generating
/// over an existing site replaces files in place.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SitewrightResult<()> {
        // A plain file squatting on the target path gives a clearer error
        // than the raw io::Error from create_dir_all.
        if path.exists() && !path.is_dir() {
            use sitewright_core::application::ApplicationError;
            return Err(ApplicationError::InvalidOutputRoot {
                path: path.to_path_buf(),
                reason: "a file with this name already exists".into(),
            }
            .into());
        }
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SitewrightResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> SitewrightResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> sitewright_core::error::SitewrightError {
    use sitewright_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
