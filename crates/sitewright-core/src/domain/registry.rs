//! Feature and page registry.
//!
//! # Design Rationale
//!
//! The feature→pages mapping and the per-page presentation data are the two
//! load-bearing lookup tables of the generator. Scattering them across
//! `match` arms would mean edits in several places per new feature; instead
//! each feature is described exactly once by its [`FeatureDef`] and each page
//! by its [`PageDef`]. All derivation and lookups are O(n) table scans over
//! static data.
//!
//! # Adding a New Feature
//!
//! 1. Add a variant to `Feature` in `value_objects.rs`
//! 2. Add one [`FeatureDef`] entry to [`FEATURE_REGISTRY`]
//! 3. Register any new pages it contributes (below)
//! 4. That is all; page derivation reads only the registry
//!
//! # Adding a New Page
//!
//! 1. Add a variant to `Page` in `value_objects.rs`
//! 2. Add a [`PageDef`] entry to [`PAGE_REGISTRY`]
//! 3. Teach `compose.rs` its layout (or let it use the standard layout)

use crate::domain::value_objects::{Feature, FeatureSet, Page};

// ── Base pages ───────────────────────────────────────────────────────────────

/// Pages present in every generated site, regardless of selected features.
///
/// Order is meaningful: it is the order they appear in navigation and in the
/// router table.
pub static BASE_PAGES: &[Page] = &[Page::Home, Page::About, Page::Services];

// ── Feature definitions ──────────────────────────────────────────────────────

/// Describes what one feature contributes to a generated site.
///
/// This is the single source of truth for the feature→pages mapping.
#[derive(Debug, Clone, Copy)]
pub struct FeatureDef {
    /// The feature this entry describes.
    pub feature: Feature,

    /// Pages this feature adds to the derived page list.
    ///
    /// Never empty, and must not overlap [`BASE_PAGES`]. The
    /// `assert_registry_integrity` test enforces both.
    pub pages: &'static [Page],

    /// One-line description shown by `sitewright list features`.
    pub summary: &'static str,
}

/// Single source of truth for feature contributions.
///
/// Ordering is meaningful: derived page lists append contributions in this
/// order, so generation stays deterministic no matter how flags were passed.
pub static FEATURE_REGISTRY: &[FeatureDef] = &[
    FeatureDef {
        feature: Feature::ContactForm,
        pages: &[Page::Contact],
        summary: "Contact page with an enquiry form",
    },
    FeatureDef {
        feature: Feature::Gallery,
        pages: &[Page::Gallery],
        summary: "Photo gallery grid",
    },
    FeatureDef {
        feature: Feature::Testimonials,
        pages: &[Page::Testimonials],
        summary: "Customer testimonial wall",
    },
    FeatureDef {
        feature: Feature::Auth,
        pages: &[Page::Login, Page::Register, Page::Profile],
        summary: "Login, registration and account profile pages",
    },
    FeatureDef {
        feature: Feature::Reviews,
        pages: &[Page::Reviews],
        summary: "Customer review listing",
    },
    FeatureDef {
        feature: Feature::Chat,
        pages: &[Page::Chat],
        summary: "Live chat page",
    },
    FeatureDef {
        feature: Feature::Search,
        pages: &[Page::Search],
        summary: "Site search page",
    },
    FeatureDef {
        feature: Feature::Payments,
        pages: &[Page::Payments],
        summary: "Payments and billing page",
    },
    FeatureDef {
        feature: Feature::Booking,
        pages: &[Page::Booking],
        summary: "Appointment booking page",
    },
    FeatureDef {
        feature: Feature::Analytics,
        pages: &[Page::Analytics],
        summary: "Visitor analytics overview page",
    },
    FeatureDef {
        feature: Feature::Geolocation,
        pages: &[Page::Locations],
        summary: "Locations page with directions",
    },
];

// ── Page definitions ─────────────────────────────────────────────────────────

/// Where a page's CSS rules live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSource {
    /// The page has its own `<Component>.css` next to the component.
    Own,
    /// The page uses the shared `pages.css` standard-layout stylesheet.
    Shared,
}

/// Presentation data for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageDef {
    /// The page this entry describes.
    pub page: Page,

    /// Label used for the navigation link.
    pub nav_label: &'static str,

    /// Whether the page carries its own stylesheet or the shared one.
    ///
    /// Pages with a distinctive layout (hero, forms, grids) get their own
    /// file; standard-layout pages share `pages.css`.
    pub style: StyleSource,
}

/// Single source of truth for page presentation.
pub static PAGE_REGISTRY: &[PageDef] = &[
    PageDef {
        page: Page::Home,
        nav_label: "Home",
        style: StyleSource::Own,
    },
    PageDef {
        page: Page::About,
        nav_label: "About",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Services,
        nav_label: "Services",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Contact,
        nav_label: "Contact",
        style: StyleSource::Own,
    },
    PageDef {
        page: Page::Gallery,
        nav_label: "Gallery",
        style: StyleSource::Own,
    },
    PageDef {
        page: Page::Testimonials,
        nav_label: "Testimonials",
        style: StyleSource::Own,
    },
    PageDef {
        page: Page::Login,
        nav_label: "Login",
        style: StyleSource::Own,
    },
    PageDef {
        page: Page::Register,
        nav_label: "Register",
        style: StyleSource::Own,
    },
    PageDef {
        page: Page::Profile,
        nav_label: "Profile",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Reviews,
        nav_label: "Reviews",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Chat,
        nav_label: "Chat",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Search,
        nav_label: "Search",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Payments,
        nav_label: "Payments",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Booking,
        nav_label: "Booking",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Analytics,
        nav_label: "Analytics",
        style: StyleSource::Shared,
    },
    PageDef {
        page: Page::Locations,
        nav_label: "Locations",
        style: StyleSource::Shared,
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for registry queries.
// Do not write `match` arms on features or pages elsewhere.

/// Find the definition for a specific feature.
///
/// Returns `None` only if the feature is not registered, a programming
/// error, not a user error. The `assert_registry_integrity` test catches it.
pub fn find_feature(feature: Feature) -> Option<&'static FeatureDef> {
    FEATURE_REGISTRY.iter().find(|def| def.feature == feature)
}

/// Find the presentation definition for a specific page.
pub fn find_page(page: Page) -> Option<&'static PageDef> {
    PAGE_REGISTRY.iter().find(|def| def.page == page)
}

/// Pages contributed by one feature.
///
/// Replaces `Feature::pages()` match arms. Unregistered features contribute
/// nothing (caught by the integrity test in development).
pub fn pages_for_feature(feature: Feature) -> &'static [Page] {
    find_feature(feature).map(|def| def.pages).unwrap_or(&[])
}

/// Navigation label for a page. Falls back to the component name.
pub fn nav_label(page: Page) -> &'static str {
    find_page(page)
        .map(|def| def.nav_label)
        .unwrap_or_else(|| page.component_name())
}

/// Style source for a page. Unregistered pages use the shared stylesheet.
pub fn style_source(page: Page) -> StyleSource {
    find_page(page)
        .map(|def| def.style)
        .unwrap_or(StyleSource::Shared)
}

/// Derive the page list for a feature selection.
///
/// Base pages come first in [`BASE_PAGES`] order, then feature contributions
/// in [`FEATURE_REGISTRY`] order. The result has no duplicates and is a pure
/// function of set membership: selection order never changes the output.
pub fn derive_pages(features: &FeatureSet) -> Vec<Page> {
    let mut pages: Vec<Page> = BASE_PAGES.to_vec();
    for def in FEATURE_REGISTRY {
        if !features.contains(def.feature) {
            continue;
        }
        for &page in def.pages {
            if !pages.contains(&page) {
                pages.push(page);
            }
        }
    }
    pages
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registries are internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for def in FEATURE_REGISTRY {
        assert!(
            !def.pages.is_empty(),
            "Feature {:?} contributes no pages",
            def.feature
        );
        assert!(
            !def.summary.is_empty(),
            "Feature {:?} has an empty summary",
            def.feature
        );

        for page in def.pages {
            // Base pages are unconditional; no feature may claim one.
            assert!(
                !page.is_base(),
                "Feature {:?} claims base page {:?}",
                def.feature,
                page
            );
            // Every contributed page must carry presentation data.
            assert!(
                find_page(*page).is_some(),
                "Feature {:?} contributes unregistered page {:?}",
                def.feature,
                page
            );
        }

        // Exactly one entry per feature.
        let count = FEATURE_REGISTRY
            .iter()
            .filter(|d| d.feature == def.feature)
            .count();
        assert!(
            count == 1,
            "Feature {:?} registered {count} times",
            def.feature
        );
    }

    for def in PAGE_REGISTRY {
        assert!(
            !def.nav_label.is_empty(),
            "Page {:?} has an empty nav label",
            def.page
        );
        let count = PAGE_REGISTRY.iter().filter(|d| d.page == def.page).count();
        assert!(count == 1, "Page {:?} registered {count} times", def.page);
    }

    for page in BASE_PAGES {
        assert!(
            find_page(*page).is_some(),
            "Base page {:?} is not registered",
            page
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Every enum variant, for exhaustiveness checks against the registries.
    const ALL_FEATURES: [Feature; 11] = [
        Feature::ContactForm,
        Feature::Gallery,
        Feature::Testimonials,
        Feature::Auth,
        Feature::Reviews,
        Feature::Chat,
        Feature::Search,
        Feature::Payments,
        Feature::Booking,
        Feature::Analytics,
        Feature::Geolocation,
    ];

    const ALL_PAGES: [Page; 16] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Contact,
        Page::Gallery,
        Page::Testimonials,
        Page::Login,
        Page::Register,
        Page::Profile,
        Page::Reviews,
        Page::Chat,
        Page::Search,
        Page::Payments,
        Page::Booking,
        Page::Analytics,
        Page::Locations,
    ];

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn every_feature_is_registered() {
        for feature in ALL_FEATURES {
            assert!(
                find_feature(feature).is_some(),
                "{feature:?} missing from FEATURE_REGISTRY"
            );
        }
    }

    #[test]
    fn every_page_is_registered() {
        for page in ALL_PAGES {
            assert!(
                find_page(page).is_some(),
                "{page:?} missing from PAGE_REGISTRY"
            );
        }
    }

    #[test]
    fn every_non_base_page_is_contributed_by_some_feature() {
        for page in ALL_PAGES {
            if page.is_base() {
                continue;
            }
            let contributed = FEATURE_REGISTRY
                .iter()
                .any(|def| def.pages.contains(&page));
            assert!(contributed, "{page:?} is unreachable from any feature");
        }
    }

    // ── pages_for_feature ────────────────────────────────────────────────────

    #[test]
    fn auth_contributes_login_register_profile() {
        assert_eq!(
            pages_for_feature(Feature::Auth),
            &[Page::Login, Page::Register, Page::Profile]
        );
    }

    #[test]
    fn geolocation_contributes_locations() {
        assert_eq!(pages_for_feature(Feature::Geolocation), &[Page::Locations]);
    }

    #[test]
    fn single_page_features_contribute_their_page() {
        assert_eq!(pages_for_feature(Feature::ContactForm), &[Page::Contact]);
        assert_eq!(pages_for_feature(Feature::Gallery), &[Page::Gallery]);
        assert_eq!(pages_for_feature(Feature::Chat), &[Page::Chat]);
    }

    // ── derive_pages ─────────────────────────────────────────────────────────

    #[test]
    fn no_features_gives_base_pages_only() {
        let pages = derive_pages(&FeatureSet::new());
        assert_eq!(pages, vec![Page::Home, Page::About, Page::Services]);
    }

    #[test]
    fn contact_form_and_gallery_give_exactly_five_pages() {
        let set: FeatureSet = [Feature::ContactForm, Feature::Gallery]
            .into_iter()
            .collect();
        let pages = derive_pages(&set);
        assert_eq!(
            pages,
            vec![
                Page::Home,
                Page::About,
                Page::Services,
                Page::Contact,
                Page::Gallery
            ]
        );
    }

    #[test]
    fn derivation_ignores_selection_order() {
        let (a, _) = FeatureSet::from_tags(["auth", "gallery", "chat"]);
        let (b, _) = FeatureSet::from_tags(["chat", "auth", "gallery"]);
        assert_eq!(derive_pages(&a), derive_pages(&b));
    }

    #[test]
    fn all_features_cover_the_whole_page_universe() {
        let set: FeatureSet = ALL_FEATURES.into_iter().collect();
        let pages = derive_pages(&set);
        assert_eq!(pages.len(), ALL_PAGES.len());
        for page in ALL_PAGES {
            assert!(pages.contains(&page), "{page:?} missing from full derive");
        }
    }

    #[test]
    fn derived_list_never_contains_duplicates() {
        let set: FeatureSet = ALL_FEATURES.into_iter().collect();
        let pages = derive_pages(&set);
        let mut seen = std::collections::HashSet::new();
        for page in &pages {
            assert!(seen.insert(page), "{page:?} appears twice");
        }
    }

    #[test]
    fn base_pages_lead_every_derivation() {
        let (set, _) = FeatureSet::from_tags(["payments", "booking"]);
        let pages = derive_pages(&set);
        assert_eq!(&pages[..3], BASE_PAGES);
    }

    // ── presentation lookups ─────────────────────────────────────────────────

    #[test]
    fn home_has_its_own_stylesheet() {
        assert_eq!(style_source(Page::Home), StyleSource::Own);
        assert_eq!(style_source(Page::Contact), StyleSource::Own);
        assert_eq!(style_source(Page::Gallery), StyleSource::Own);
    }

    #[test]
    fn standard_layout_pages_share_a_stylesheet() {
        assert_eq!(style_source(Page::About), StyleSource::Shared);
        assert_eq!(style_source(Page::Analytics), StyleSource::Shared);
        assert_eq!(style_source(Page::Locations), StyleSource::Shared);
    }

    #[test]
    fn nav_labels_are_present_for_all_pages() {
        for page in ALL_PAGES {
            assert!(!nav_label(page).is_empty());
        }
    }
}
