//! Content model: authored industry copy and its resolution.
//!
//! The resolver side of the generator. An [`IndustryProfile`] is authored
//! static copy for one industry; the [`ContentLibrary`] holds every profile
//! plus the mandatory `default` profile and resolves a [`ContentBundle`]:
//! one [`PageContent`] per requested page, business name/description spliced
//! in, never empty.
//!
//! Resolution is a pure function: same brief + same pages → same bundle.
//! There is no "unknown industry" error anywhere in this module; unknown tags
//! resolve to the `default` profile by contract.
//!
//! # Placeholders
//!
//! Authored copy may reference `{{BUSINESS_NAME}}` and
//! `{{BUSINESS_DESCRIPTION}}`; both are substituted during resolution. A
//! blank description is replaced with a stock sentence so no page ever
//! renders an empty field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::Page;

/// Tag of the universal fallback profile. A first-class table entry, not an
/// implicit branch: the library refuses to construct without it.
pub const FALLBACK_TAG: &str = "default";

// ── Resolved content ─────────────────────────────────────────────────────────

/// A titled snippet rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub title: String,
    pub body: String,
}

/// The resolved text for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub subtitle: String,
    /// Bullet-style list entries; may be empty.
    pub items: Vec<String>,
    /// Card entries; may be empty.
    pub cards: Vec<ContentCard>,
}

impl PageContent {
    /// Title and subtitle are the hard non-empty guarantee; lists are
    /// optional by design.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.subtitle.trim().is_empty()
    }
}

/// Every page's resolved content for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBundle {
    profile_tag: String,
    pages: BTreeMap<Page, PageContent>,
}

impl ContentBundle {
    /// The tag of the profile that actually supplied the copy. Equals
    /// [`FALLBACK_TAG`] when the requested industry was unrecognized.
    pub fn profile_tag(&self) -> &str {
        &self.profile_tag
    }

    pub fn get(&self, page: Page) -> Option<&PageContent> {
        self.pages.get(&page)
    }

    pub fn pages(&self) -> impl Iterator<Item = (Page, &PageContent)> {
        self.pages.iter().map(|(page, content)| (*page, content))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

// ── Authored copy ────────────────────────────────────────────────────────────

/// Authored card copy, placeholder-bearing.
#[derive(Debug, Clone, Copy)]
pub struct SeedCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// Authored copy for one page within one profile.
#[derive(Debug, Clone, Copy)]
pub struct PageSeed {
    pub page: Page,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [&'static str],
    pub cards: &'static [SeedCard],
}

/// One industry's authored copy.
///
/// Profiles need not cover every page: resolution falls through to the
/// `default` profile's seed for the page, and past that to synthesized
/// generic text, so partial authoring is normal.
#[derive(Debug, Clone, Copy)]
pub struct IndustryProfile {
    /// Lookup key, matched case-insensitively against the brief's tag.
    pub tag: &'static str,
    /// Human-readable name for listings.
    pub display_name: &'static str,
    pub seeds: &'static [PageSeed],
}

impl IndustryProfile {
    pub fn seed_for(&self, page: Page) -> Option<&PageSeed> {
        self.seeds.iter().find(|seed| seed.page == page)
    }
}

// ── Placeholder substitution ─────────────────────────────────────────────────

/// Variables available to authored copy during resolution.
#[derive(Debug, Clone)]
struct ContentContext {
    variables: Vec<(&'static str, String)>,
}

impl ContentContext {
    fn new(business_name: &str, description: &str) -> Self {
        let description = if description.trim().is_empty() {
            format!("At {business_name}, quality and service come first.")
        } else {
            description.to_string()
        };
        Self {
            variables: vec![
                ("BUSINESS_NAME", business_name.to_string()),
                ("BUSINESS_DESCRIPTION", description),
            ],
        }
    }

    fn render(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.variables {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}

// ── Library ──────────────────────────────────────────────────────────────────

/// Immutable industry table with a first-class `default` entry.
///
/// Constructed once at startup from the builtin profiles and handed to the
/// generation service by value. Lookup never fails; that is the point.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    profiles: Vec<IndustryProfile>,
}

impl ContentLibrary {
    /// Build a library. Fails if the `default` profile is missing or a tag
    /// appears twice. Both are table defects, caught at startup rather than
    /// surfacing mid-generation.
    pub fn new(profiles: Vec<IndustryProfile>) -> Result<Self, DomainError> {
        if !profiles.iter().any(|p| p.tag == FALLBACK_TAG) {
            return Err(DomainError::MissingFallbackProfile);
        }
        for (i, profile) in profiles.iter().enumerate() {
            if profiles[..i]
                .iter()
                .any(|p| p.tag.eq_ignore_ascii_case(profile.tag))
            {
                return Err(DomainError::DuplicateIndustry {
                    tag: profile.tag.to_string(),
                });
            }
        }
        Ok(Self { profiles })
    }

    /// All profiles, fallback included, in registration order.
    pub fn profiles(&self) -> impl Iterator<Item = &IndustryProfile> {
        self.profiles.iter()
    }

    /// Case-insensitive tag lookup. `None` means "use the fallback"; callers
    /// outside this module only see that as [`ContentBundle::profile_tag`].
    pub fn find(&self, tag: &str) -> Option<&IndustryProfile> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        self.profiles
            .iter()
            .find(|p| p.tag.eq_ignore_ascii_case(tag))
    }

    fn fallback(&self) -> &IndustryProfile {
        // Guaranteed by the constructor.
        self.profiles
            .iter()
            .find(|p| p.tag == FALLBACK_TAG)
            .unwrap_or(&self.profiles[0])
    }

    /// Resolve content for every requested page.
    ///
    /// Pure and total: the returned bundle has an entry for each page in
    /// `pages`, with non-empty title and subtitle. Seed precedence per page:
    /// industry profile → `default` profile → synthesized generic text.
    pub fn resolve(
        &self,
        industry: &str,
        business_name: &str,
        description: &str,
        pages: &[Page],
    ) -> ContentBundle {
        let profile = self.find(industry).unwrap_or_else(|| self.fallback());
        let fallback = self.fallback();
        let ctx = ContentContext::new(business_name, description);

        let mut resolved = BTreeMap::new();
        for &page in pages {
            let seed = profile.seed_for(page).or_else(|| fallback.seed_for(page));
            let content = match seed {
                Some(seed) => PageContent {
                    title: ctx.render(seed.title),
                    subtitle: ctx.render(seed.subtitle),
                    items: seed.items.iter().map(|item| ctx.render(item)).collect(),
                    cards: seed
                        .cards
                        .iter()
                        .map(|card| ContentCard {
                            title: ctx.render(card.title),
                            body: ctx.render(card.body),
                        })
                        .collect(),
                },
                None => synthesize_generic(page, business_name),
            };
            resolved.insert(page, content);
        }

        ContentBundle {
            profile_tag: profile.tag.to_string(),
            pages: resolved,
        }
    }
}

/// Last-resort page copy when neither the industry nor the `default` profile
/// authored a seed. Keeps the non-empty contract unconditional.
fn synthesize_generic(page: Page, business_name: &str) -> PageContent {
    let label = crate::domain::registry::nav_label(page);
    PageContent {
        title: label.to_string(),
        subtitle: format!("{label} at {business_name}."),
        items: Vec::new(),
        cards: Vec::new(),
    }
}
