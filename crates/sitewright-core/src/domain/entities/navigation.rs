//! Navigation model.
//!
//! One derived value feeds both the navbar component and the router table;
//! they can never diverge because neither re-derives anything: both walk
//! this same entry list.

use crate::domain::{registry, value_objects::Page};

/// One navigable page: label for the link, path for the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub page: Page,
    pub label: &'static str,
    pub path: &'static str,
}

/// The full navigation for one generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    entries: Vec<NavEntry>,
}

impl NavigationModel {
    /// One entry per page, in the derived order. Home maps to `/`, every
    /// other page to `/<name>`.
    pub fn from_pages(pages: &[Page]) -> Self {
        let entries = pages
            .iter()
            .map(|&page| NavEntry {
                page,
                label: registry::nav_label(page),
                path: page.route_path(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        self.entries.iter().map(|entry| entry.page)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
