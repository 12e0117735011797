//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// The generator has exactly one external dependency, the filesystem, so this
/// enum is small. Faults are fatal: a failed write aborts the run and leaves
/// whatever was already written in place. There is no rollback.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output location cannot be used at all (a file sits where the project
    /// directory should go, for instance).
    #[error("Cannot generate into {path}: {reason}")]
    InvalidOutputRoot { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Partial output may remain; inspect the directory before retrying".into(),
            ],
            Self::InvalidOutputRoot { path, .. } => vec![
                format!("Cannot use: {}", path.display()),
                "Pick a different project name or path".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::InvalidOutputRoot { .. } => ErrorCategory::Validation,
        }
    }
}
