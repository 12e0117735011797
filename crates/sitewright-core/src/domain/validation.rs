use crate::domain::{
    entities::{
        content::ContentBundle, markup::Component, site_plan::SitePlan, style::Stylesheet,
    },
    error::DomainError,
    value_objects::Page,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Project names become directory names, so the rules are filesystem
    /// rules: non-empty, no separators, no leading punctuation.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let reject = |reason: &str| {
            Err(DomainError::InvalidProjectName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.is_empty() {
            return reject("name is empty");
        }
        if name.len() > 64 {
            return reject("name is longer than 64 characters");
        }
        let mut chars = name.chars();
        let first = chars.next().unwrap_or(' ');
        if !first.is_ascii_alphanumeric() {
            return reject("name must start with a letter or digit");
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return reject("only letters, digits, '-' and '_' are allowed");
        }
        Ok(())
    }

    pub fn validate_site_plan(plan: &SitePlan) -> Result<(), DomainError> {
        plan.validate()
    }

    /// The resolver's output contract: an entry for every derived page, with
    /// non-empty title and subtitle. A violation is a content-table defect.
    pub fn validate_bundle(bundle: &ContentBundle, pages: &[Page]) -> Result<(), DomainError> {
        for &page in pages {
            let content = bundle.get(page).ok_or_else(|| {
                DomainError::MissingPageContent {
                    page: page.to_string(),
                }
            })?;
            if content.title.trim().is_empty() {
                return Err(DomainError::EmptyContentField {
                    page: page.to_string(),
                    field: "title",
                });
            }
            if content.subtitle.trim().is_empty() {
                return Err(DomainError::EmptyContentField {
                    page: page.to_string(),
                    field: "subtitle",
                });
            }
        }
        Ok(())
    }

    /// Every class the component references must have a rule in the
    /// stylesheet it imports. Checked before any file is written; a miss
    /// means a page builder and its stylesheet builder drifted apart.
    pub fn validate_coverage(
        component: &Component,
        stylesheet: &Stylesheet,
    ) -> Result<(), DomainError> {
        let styled = stylesheet.class_names();
        let missing: Vec<String> = component
            .class_names()
            .into_iter()
            .filter(|class| !styled.contains(class))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::UnstyledClasses {
                component: component.name().to_string(),
                classes: missing,
            })
        }
    }
}
