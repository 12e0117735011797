// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sitewright.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O is handled via ports (traits) defined in the application layer;
//! content catalogs are plain data handed in from the outside.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Domain objects are Clone and value-comparable
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod compose;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    brief::{SiteBrief, SiteBriefBuilder},
    content::{ContentBundle, ContentCard, ContentLibrary, IndustryProfile, PageContent, PageSeed, SeedCard, FALLBACK_TAG},
    markup::{Component, Element, Import},
    navigation::{NavEntry, NavigationModel},
    site_plan::{FileKind, OutputFile, SitePlan},
    style::{MediaBlock, Rule, Stylesheet},
};

pub use compose::PageArtifact;
pub use error::{DomainError, ErrorCategory};
pub use registry::{derive_pages, FeatureDef, PageDef, StyleSource, BASE_PAGES, FEATURE_REGISTRY, PAGE_REGISTRY};
pub use value_objects::{Feature, FeatureSet, MarkupFlavor, Page};

// Plumbing used by adapters and tests
pub use entities::common::RelativePath;
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn feature_parses_correctly() {
        assert_eq!(Feature::from_str("gallery").unwrap(), Feature::Gallery);
        assert_eq!(Feature::from_str("CONTACT-FORM").unwrap(), Feature::ContactForm);
        assert_eq!(Feature::from_str("authentication").unwrap(), Feature::Auth);
        assert!(Feature::from_str("blog").is_err());
    }

    #[test]
    fn feature_set_parses_leniently() {
        let (features, ignored) =
            FeatureSet::from_tags(["gallery", "hovercraft", "auth", "warp-drive"]);
        assert!(features.contains(Feature::Gallery));
        assert!(features.contains(Feature::Auth));
        assert_eq!(features.len(), 2);
        assert_eq!(ignored, vec!["hovercraft".to_string(), "warp-drive".to_string()]);
    }

    // ========================================================================
    // Page Derivation Tests
    // ========================================================================

    #[test]
    fn derivation_starts_from_the_base_pages() {
        let pages = derive_pages(&FeatureSet::new());
        assert_eq!(pages, vec![Page::Home, Page::About, Page::Services]);
    }

    #[test]
    fn auth_contributes_three_pages() {
        let (features, _) = FeatureSet::from_tags(["auth"]);
        let pages = derive_pages(&features);
        assert!(pages.contains(&Page::Login));
        assert!(pages.contains(&Page::Register));
        assert!(pages.contains(&Page::Profile));
        assert_eq!(pages.len(), 6);
    }

    // ========================================================================
    // Full Pipeline Tests (brief -> pages -> content -> markup -> coverage)
    // ========================================================================

    static TEST_SEEDS: &[PageSeed] = &[PageSeed {
        page: Page::Home,
        title: "Welcome to {{BUSINESS_NAME}}",
        subtitle: "{{BUSINESS_DESCRIPTION}}",
        items: &["Friendly staff", "Fair prices"],
        cards: &[SeedCard {
            title: "Local",
            body: "Rooted in the neighborhood.",
        }],
    }];

    fn test_library() -> ContentLibrary {
        ContentLibrary::new(vec![IndustryProfile {
            tag: FALLBACK_TAG,
            display_name: "General",
            seeds: TEST_SEEDS,
        }])
        .unwrap()
    }

    #[test]
    fn brief_to_styled_pages_end_to_end() {
        let brief = SiteBrief::builder("corner-bakery")
            .business_name("Corner Bakery")
            .description("Fresh bread, every morning.")
            .industry("bakery")
            .features(FeatureSet::from_tags(["contact-form", "gallery"]).0)
            .build()
            .unwrap();

        let pages = derive_pages(brief.features());
        assert_eq!(
            pages,
            vec![Page::Home, Page::About, Page::Services, Page::Contact, Page::Gallery]
        );

        let nav = NavigationModel::from_pages(&pages);
        assert_eq!(nav.len(), pages.len());

        let bundle = test_library().resolve(
            brief.industry(),
            brief.business_name(),
            brief.description(),
            &pages,
        );
        DomainValidator::validate_bundle(&bundle, &pages).unwrap();

        let shared = compose::shared_stylesheet();
        for &page in &pages {
            let content = bundle.get(page).unwrap();
            let artifact = compose::compose_page(page, content, &nav, brief.flavor());
            let sheet = artifact.stylesheet.as_ref().unwrap_or(&shared);
            DomainValidator::validate_coverage(&artifact.component, sheet).unwrap();
        }

        let home = bundle.get(Page::Home).unwrap();
        assert_eq!(home.title, "Welcome to Corner Bakery");
        assert_eq!(home.subtitle, "Fresh bread, every morning.");
    }

    #[test]
    fn navbar_labels_come_from_the_registry() {
        let pages = vec![Page::Home, Page::About, Page::Locations];
        let nav = NavigationModel::from_pages(&pages);
        let labels: Vec<_> = nav.entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Locations"]);
        let paths: Vec<_> = nav.entries().iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/about", "/locations"]);
    }

    // ========================================================================
    // Plan Tests
    // ========================================================================

    #[test]
    fn plan_rejects_duplicate_paths() {
        let plan = SitePlan::new("/tmp/site")
            .with_file("src/App.jsx", "a", FileKind::Config)
            .with_file("src/App.jsx", "b", FileKind::Config);
        assert!(plan.validate().is_err());
    }

    #[test]
    fn relative_paths_stay_relative() {
        assert!(RelativePath::try_new("src/pages/Home.jsx").is_ok());
        assert!(RelativePath::try_new("/etc/passwd").is_err());
    }
}
