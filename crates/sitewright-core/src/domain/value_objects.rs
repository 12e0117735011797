//! Domain value objects: Feature, FeatureSet, Page, MarkupFlavor.
//!
//! # Design
//!
//! These are pure value types: `Copy` (except the set), compared by value,
//! no identity. They hold NO page-derivation logic. Which pages a feature
//! contributes, and how a page is styled, lives in `registry.rs`. This file's
//! only job is to define the types, their string representations, and their
//! `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a registry entry in `registry.rs`
//! 4. Done; nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ── Feature ──────────────────────────────────────────────────────────────────

/// A selectable site capability.
///
/// Each feature contributes one or more pages to the generated site. To add a
/// new feature: add a variant here, then add a `FeatureDef` in `registry.rs`.
/// No other files change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    ContactForm,
    Gallery,
    Testimonials,
    Auth,
    Reviews,
    Chat,
    Search,
    Payments,
    Booking,
    Analytics,
    Geolocation,
}

impl Feature {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContactForm => "contact-form",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
            Self::Auth => "auth",
            Self::Reviews => "reviews",
            Self::Chat => "chat",
            Self::Search => "search",
            Self::Payments => "payments",
            Self::Booking => "booking",
            Self::Analytics => "analytics",
            Self::Geolocation => "geolocation",
        }
    }

    /// The pages this feature contributes to the derived page list.
    ///
    /// Delegates to `registry::pages_for_feature`. Do not add match arms
    /// here; register contributions in `registry.rs` instead.
    pub fn pages(self) -> &'static [Page] {
        crate::domain::registry::pages_for_feature(self)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contact-form" | "contactform" | "contact" => Ok(Self::ContactForm),
            "gallery" => Ok(Self::Gallery),
            "testimonials" | "testimonial" => Ok(Self::Testimonials),
            "auth" | "authentication" => Ok(Self::Auth),
            "reviews" | "review" => Ok(Self::Reviews),
            "chat" => Ok(Self::Chat),
            "search" => Ok(Self::Search),
            "payments" | "payment" => Ok(Self::Payments),
            "booking" | "bookings" => Ok(Self::Booking),
            "analytics" => Ok(Self::Analytics),
            "geolocation" | "geo" => Ok(Self::Geolocation),
            other => Err(DomainError::InvalidBrief(format!(
                "unknown feature: {other}"
            ))),
        }
    }
}

// ── FeatureSet ────────────────────────────────────────────────────────────────

/// A selection of features: membership only, no ordering, no duplicates.
///
/// Iteration order is the canonical `Feature` declaration order, which keeps
/// page derivation deterministic regardless of the order flags were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet(BTreeSet<Feature>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of feature tags leniently.
    ///
    /// Unrecognized tags are not an error: they are collected into the second
    /// tuple element so the caller can report them (the generation contract is
    /// "ignore unknown flags"), and the set is built from the rest.
    pub fn from_tags<I, S>(tags: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        let mut ignored = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                continue;
            }
            match tag.parse::<Feature>() {
                Ok(feature) => {
                    set.insert(feature);
                }
                Err(_) => ignored.push(tag.to_string()),
            }
        }
        (Self(set), ignored)
    }

    pub fn insert(&mut self, feature: Feature) -> bool {
        self.0.insert(feature)
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for feature in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(feature.as_str())?;
            first = false;
        }
        Ok(())
    }
}

// ── Page ─────────────────────────────────────────────────────────────────────

/// A page the generator knows how to emit.
///
/// Pages are derived, never stored: the set for one run is computed from the
/// selected features plus the three always-present base pages (home, about,
/// services). Presentation data (nav label, style source) lives in
/// `registry.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Contact,
    Gallery,
    Testimonials,
    Login,
    Register,
    Profile,
    Reviews,
    Chat,
    Search,
    Payments,
    Booking,
    Analytics,
    Locations,
}

impl Page {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Contact => "contact",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
            Self::Login => "login",
            Self::Register => "register",
            Self::Profile => "profile",
            Self::Reviews => "reviews",
            Self::Chat => "chat",
            Self::Search => "search",
            Self::Payments => "payments",
            Self::Booking => "booking",
            Self::Analytics => "analytics",
            Self::Locations => "locations",
        }
    }

    /// Component name: the page name capitalized, used for file naming
    /// (`Home.jsx`) and for the JSX identifier (`<Home />`).
    pub const fn component_name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Contact => "Contact",
            Self::Gallery => "Gallery",
            Self::Testimonials => "Testimonials",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Profile => "Profile",
            Self::Reviews => "Reviews",
            Self::Chat => "Chat",
            Self::Search => "Search",
            Self::Payments => "Payments",
            Self::Booking => "Booking",
            Self::Analytics => "Analytics",
            Self::Locations => "Locations",
        }
    }

    /// Router path: home maps to the root, every other page to `/<name>`.
    pub const fn route_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Contact => "/contact",
            Self::Gallery => "/gallery",
            Self::Testimonials => "/testimonials",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Profile => "/profile",
            Self::Reviews => "/reviews",
            Self::Chat => "/chat",
            Self::Search => "/search",
            Self::Payments => "/payments",
            Self::Booking => "/booking",
            Self::Analytics => "/analytics",
            Self::Locations => "/locations",
        }
    }

    /// Whether this page is one of the three always-generated base pages.
    pub const fn is_base(&self) -> bool {
        matches!(self, Self::Home | Self::About | Self::Services)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "services" => Ok(Self::Services),
            "contact" => Ok(Self::Contact),
            "gallery" => Ok(Self::Gallery),
            "testimonials" => Ok(Self::Testimonials),
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            "profile" => Ok(Self::Profile),
            "reviews" => Ok(Self::Reviews),
            "chat" => Ok(Self::Chat),
            "search" => Ok(Self::Search),
            "payments" => Ok(Self::Payments),
            "booking" => Ok(Self::Booking),
            "analytics" => Ok(Self::Analytics),
            "locations" => Ok(Self::Locations),
            other => Err(DomainError::InvalidBrief(format!("unknown page: {other}"))),
        }
    }
}

// ── MarkupFlavor ──────────────────────────────────────────────────────────────

/// The markup dialect emitted for page components.
///
/// Only React/JSX is in scope; the selector exists so the brief carries the
/// choice explicitly and file extensions are derived rather than hard-coded
/// at call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupFlavor {
    #[default]
    React,
}

impl MarkupFlavor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
        }
    }

    pub const fn component_extension(&self) -> &'static str {
        match self {
            Self::React => "jsx",
        }
    }

    pub const fn stylesheet_extension(&self) -> &'static str {
        match self {
            Self::React => "css",
        }
    }
}

impl fmt::Display for MarkupFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupFlavor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" | "jsx" => Ok(Self::React),
            other => Err(DomainError::InvalidBrief(format!(
                "unknown markup flavor: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_display_is_kebab_case() {
        assert_eq!(Feature::ContactForm.to_string(), "contact-form");
        assert_eq!(Feature::Geolocation.to_string(), "geolocation");
    }

    #[test]
    fn feature_from_str_accepts_aliases() {
        assert_eq!(
            "contactform".parse::<Feature>().unwrap(),
            Feature::ContactForm
        );
        assert_eq!(
            "authentication".parse::<Feature>().unwrap(),
            Feature::Auth
        );
        assert_eq!("geo".parse::<Feature>().unwrap(), Feature::Geolocation);
        assert_eq!("bookings".parse::<Feature>().unwrap(), Feature::Booking);
    }

    #[test]
    fn feature_from_str_unknown_errors() {
        assert!("newsletter".parse::<Feature>().is_err());
        assert!("".parse::<Feature>().is_err());
    }

    #[test]
    fn serde_forms_match_the_cli_tags() {
        // JSON output and config files must use the same tags users type.
        let json = serde_json::to_string(&Feature::ContactForm).unwrap();
        assert_eq!(json, "\"contact-form\"");
        let back: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Feature::ContactForm);

        assert_eq!(
            serde_json::to_string(&Page::Testimonials).unwrap(),
            format!("\"{}\"", Page::Testimonials.as_str())
        );
    }

    #[test]
    fn feature_set_is_membership_only() {
        let mut set = FeatureSet::new();
        assert!(set.insert(Feature::Gallery));
        assert!(!set.insert(Feature::Gallery));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Feature::Gallery));
        assert!(!set.contains(Feature::Chat));
    }

    #[test]
    fn feature_set_from_tags_ignores_unknown() {
        let (set, ignored) =
            FeatureSet::from_tags(["gallery", "jacuzzi", "contact-form", "blog"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Feature::Gallery));
        assert!(set.contains(Feature::ContactForm));
        assert_eq!(ignored, vec!["jacuzzi".to_string(), "blog".to_string()]);
    }

    #[test]
    fn feature_set_from_tags_skips_blank_entries() {
        let (set, ignored) = FeatureSet::from_tags(["", "  ", "chat"]);
        assert_eq!(set.len(), 1);
        assert!(ignored.is_empty());
    }

    #[test]
    fn feature_set_iteration_is_deterministic() {
        let (a, _) = FeatureSet::from_tags(["search", "auth", "gallery"]);
        let (b, _) = FeatureSet::from_tags(["gallery", "search", "auth"]);
        let order_a: Vec<_> = a.iter().collect();
        let order_b: Vec<_> = b.iter().collect();
        assert_eq!(order_a, order_b);
    }

    #[test]
    fn page_route_paths_follow_scheme() {
        assert_eq!(Page::Home.route_path(), "/");
        assert_eq!(Page::About.route_path(), "/about");
        assert_eq!(Page::Locations.route_path(), "/locations");
    }

    #[test]
    fn page_component_names_are_capitalized() {
        assert_eq!(Page::Home.component_name(), "Home");
        assert_eq!(Page::Testimonials.component_name(), "Testimonials");
    }

    #[test]
    fn base_pages_are_exactly_home_about_services() {
        assert!(Page::Home.is_base());
        assert!(Page::About.is_base());
        assert!(Page::Services.is_base());
        assert!(!Page::Contact.is_base());
        assert!(!Page::Analytics.is_base());
    }

    #[test]
    fn page_from_str_round_trips() {
        for page in [Page::Home, Page::Contact, Page::Locations] {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert!("landing".parse::<Page>().is_err());
    }

    #[test]
    fn markup_flavor_defaults_to_react() {
        assert_eq!(MarkupFlavor::default(), MarkupFlavor::React);
        assert_eq!(MarkupFlavor::React.component_extension(), "jsx");
        assert_eq!(MarkupFlavor::React.stylesheet_extension(), "css");
    }

    #[test]
    fn markup_flavor_from_str_accepts_jsx_alias() {
        assert_eq!("jsx".parse::<MarkupFlavor>().unwrap(), MarkupFlavor::React);
        assert!("vue".parse::<MarkupFlavor>().is_err());
    }
}
