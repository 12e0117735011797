// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid site brief: {0}")]
    InvalidBrief(String),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Duplicate output path: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Site plan contains no files")]
    EmptyPlan,

    // ========================================================================
    // Coverage Violations (generated output would be inconsistent)
    // ========================================================================
    #[error("'{component}' references classes with no stylesheet rule: {}", classes.join(", "))]
    UnstyledClasses {
        component: String,
        classes: Vec<String>,
    },

    // ========================================================================
    // Content Table Defects
    // ========================================================================
    #[error("Content table produced empty '{field}' for page '{page}'")]
    EmptyContentField { page: String, field: &'static str },

    #[error("Content bundle is missing page '{page}'")]
    MissingPageContent { page: String },

    #[error("Content library has no 'default' profile")]
    MissingFallbackProfile,

    #[error("Industry tag '{tag}' registered twice in the content library")]
    DuplicateIndustry { tag: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBrief(msg) => vec![
                "Check your site brief".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Problem: {}", reason),
                "Project names become directory names: use letters, digits, '-' or '_'".into(),
            ],
            Self::UnstyledClasses { component, classes } => vec![
                format!(
                    "The {} builder emits classes its stylesheet does not cover: {}",
                    component,
                    classes.join(", ")
                ),
                "This is a defect in the page builders, not in your input; please report it"
                    .into(),
            ],
            Self::EmptyContentField { page, .. } | Self::MissingPageContent { page } => vec![
                format!("The builtin content table has a gap for page '{}'", page),
                "This is a defect in the content library, not in your input; please report it"
                    .into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBrief(_)
            | Self::InvalidProjectName { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyPlan => ErrorCategory::Validation,
            Self::UnstyledClasses { .. } => ErrorCategory::Coverage,
            Self::EmptyContentField { .. }
            | Self::MissingPageContent { .. }
            | Self::MissingFallbackProfile
            | Self::DuplicateIndustry { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Coverage,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyled_classes_lists_every_offender() {
        let err = DomainError::UnstyledClasses {
            component: "Home".into(),
            classes: vec!["hero".into(), "hero-cta".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Home"));
        assert!(msg.contains("hero, hero-cta"));
        assert_eq!(err.category(), ErrorCategory::Coverage);
    }

    #[test]
    fn brief_errors_are_validation() {
        assert_eq!(
            DomainError::InvalidBrief("x".into()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::EmptyPlan.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn content_gaps_are_internal_defects() {
        let err = DomainError::MissingPageContent {
            page: "chat".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.suggestions().is_empty());
    }
}
