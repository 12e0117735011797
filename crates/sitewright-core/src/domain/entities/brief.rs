//! The `SiteBrief` aggregate root and its builder.
//!
//! A `SiteBrief` is the fully-resolved description of the site the user wants
//! generated: project identity, business copy inputs, industry tag, selected
//! features, and markup flavor. Once a `SiteBrief` exists it is guaranteed
//! consistent; downstream stages never re-validate its fields.
//!
//! Free-form fields stay free-form by design: the industry tag is resolved
//! with silent fallback and business name/description are used verbatim, so
//! only the project name (which becomes a directory name) is validated.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{Feature, FeatureSet, MarkupFlavor},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated site generation brief.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBrief {
    project_name: String,
    business_name: String,
    description: String,
    industry: String,
    features: FeatureSet,
    flavor: MarkupFlavor,
}

impl SiteBrief {
    /// Start building a new `SiteBrief` for the given project name.
    ///
    /// The project name is the only required field; everything else has a
    /// sensible default (business name falls back to the project name).
    pub fn builder(project_name: impl Into<String>) -> SiteBriefBuilder {
        SiteBriefBuilder::new(project_name)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn business_name(&self) -> &str {
        &self.business_name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn industry(&self) -> &str {
        &self.industry
    }
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }
    pub const fn flavor(&self) -> MarkupFlavor {
        self.flavor
    }

    /// Validate this brief's internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_project_name(&self.project_name)?;
        Ok(())
    }
}

impl fmt::Display for SiteBrief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.project_name)?;
        if !self.industry.is_empty() {
            write!(f, " [{}]", self.industry)?;
        }
        if !self.features.is_empty() {
            write!(f, " + {}", self.features)?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`SiteBrief`]. Construct via [`SiteBrief::builder`].
#[derive(Debug, Clone)]
pub struct SiteBriefBuilder {
    project_name: String,
    business_name: Option<String>,
    description: String,
    industry: String,
    features: FeatureSet,
    flavor: MarkupFlavor,
}

impl SiteBriefBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            business_name: None,
            description: String::new(),
            industry: String::new(),
            features: FeatureSet::new(),
            flavor: MarkupFlavor::default(),
        }
    }

    /// The display name spliced into generated copy. Defaults to the project
    /// name when omitted.
    pub fn business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Free-form industry tag. Unrecognized values resolve to the fallback
    /// content profile; they are never an error.
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    /// Add a single feature to whatever is already selected.
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn flavor(mut self, flavor: MarkupFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn build(self) -> Result<SiteBrief, DomainError> {
        let business_name = match self.business_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.project_name.clone(),
        };

        let brief = SiteBrief {
            project_name: self.project_name,
            business_name,
            description: self.description,
            industry: self.industry.trim().to_string(),
            features: self.features,
            flavor: self.flavor,
        };
        brief.validate()?;
        Ok(brief)
    }
}
