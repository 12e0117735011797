use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// What role an emitted file plays in the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A page or shared component (`.jsx`).
    Markup,
    /// A CSS file.
    Stylesheet,
    /// Wiring the build consumes rather than renders, such as the router table.
    Config,
}

impl FileKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Stylesheet => "stylesheet",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted file: relative path, full text content, role.
#[derive(Debug, Clone)]
pub struct OutputFile {
    pub path: RelativePath,
    pub content: String,
    pub kind: FileKind,
}

impl OutputFile {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Final file set for one generation run, ready for materialization.
///
/// This is the output of the composition process. It contains no business
/// logic, only data: the writer walks it, the dry-run path prints it.
#[derive(Debug, Clone)]
pub struct SitePlan {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<OutputFile>,
}

impl SitePlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(
        &mut self,
        path: impl Into<RelativePath>,
        content: impl Into<String>,
        kind: FileKind,
    ) {
        self.files.push(OutputFile::new(path, content, kind));
    }

    pub fn with_file(
        mut self,
        path: impl Into<RelativePath>,
        content: impl Into<String>,
        kind: FileKind,
    ) -> Self {
        self.add_file(path, content, kind);
        self
    }

    /// Paths must be unique and the plan non-empty. Relativeness is already
    /// guaranteed by `RelativePath`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_str().to_string()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &OutputFile> {
        self.files.iter()
    }

    pub fn files_of_kind(&self, kind: FileKind) -> impl Iterator<Item = &OutputFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Every distinct parent directory needed before the files can land.
    ///
    /// Sorted, so `src` is created before `src/pages`.
    pub fn parent_dirs(&self) -> BTreeSet<PathBuf> {
        let mut dirs = BTreeSet::new();
        for file in &self.files {
            let mut current = file.path.as_path().parent();
            while let Some(dir) = current {
                if dir.as_os_str().is_empty() {
                    break;
                }
                dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
        }
        dirs
    }

    /// Find a file by its relative path. Test and dry-run convenience.
    pub fn find(&self, path: &str) -> Option<&OutputFile> {
        self.files.iter().find(|f| f.path.as_str() == path)
    }
}
