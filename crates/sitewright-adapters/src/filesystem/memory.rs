//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sitewright_core::application::ports::Filesystem;
use sitewright_core::application::ApplicationError;
use sitewright_core::error::{SitewrightError, SitewrightResult};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and keep
/// another for assertions. `fail_writes_after` injects a write fault for
/// exercising abort behavior.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    writes_remaining: Option<usize>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every write after the first `n` fail.
    pub fn fail_writes_after(&self, n: usize) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.writes_remaining = Some(n);
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    pub fn file_count(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.files.clear();
        inner.directories.clear();
        inner.writes_remaining = None;
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(path: &Path) -> SitewrightError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SitewrightResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SitewrightResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        if let Some(remaining) = inner.writes_remaining.as_mut() {
            if *remaining == 0 {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Injected write fault".into(),
                }
                .into());
            }
            *remaining -= 1;
        }

        // Parents must have been created first, like a real filesystem.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> SitewrightResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let observer = fs.clone();

        fs.create_dir_all(Path::new("/out/src")).unwrap();
        fs.write_file(Path::new("/out/src/App.jsx"), "content").unwrap();

        assert_eq!(
            observer.read_file(Path::new("/out/src/App.jsx")).as_deref(),
            Some("content")
        );
    }

    #[test]
    fn writes_require_parent_directories() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/src/App.jsx"), "x").is_err());

        fs.create_dir_all(Path::new("/out/src")).unwrap();
        assert!(fs.write_file(Path::new("/out/src/App.jsx"), "x").is_ok());
    }

    #[test]
    fn write_faults_trigger_after_the_threshold() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.fail_writes_after(2);

        assert!(fs.write_file(Path::new("/out/a"), "1").is_ok());
        assert!(fs.write_file(Path::new("/out/b"), "2").is_ok());
        assert!(fs.write_file(Path::new("/out/c"), "3").is_err());
        assert_eq!(fs.file_count(), 2);
    }

    #[test]
    fn remove_dir_all_removes_whole_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/src/pages")).unwrap();
        fs.write_file(Path::new("/out/src/pages/Home.jsx"), "x").unwrap();

        fs.remove_dir_all(Path::new("/out")).unwrap();
        assert!(!fs.exists(Path::new("/out")));
        assert!(!fs.exists(Path::new("/out/src/pages/Home.jsx")));
        assert_eq!(fs.file_count(), 0);
    }
}
