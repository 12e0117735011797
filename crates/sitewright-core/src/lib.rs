//! Sitewright Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sitewright
//! site scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         sitewright-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sitewright-adapters (Infrastructure) │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │          builtin content library)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (SiteBrief, ContentLibrary, SitePlan,  │
//! │     markup/style builders, registry)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sitewright_core::{
//!     application::GenerateService,
//!     domain::{ContentLibrary, FeatureSet, SiteBrief},
//! };
//! # let library = ContentLibrary::new(vec![]).unwrap();
//! # let filesystem: Box<dyn sitewright_core::application::ports::Filesystem> = unimplemented!();
//!
//! // 1. Describe the site
//! let brief = SiteBrief::builder("corner-bakery")
//!     .business_name("Corner Bakery")
//!     .description("Fresh bread, every morning")
//!     .industry("restaurant")
//!     .features(FeatureSet::from_tags(["contact-form", "gallery"]).0)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(library, filesystem);
//! let report = service.generate(&brief, "./corner-bakery").unwrap();
//! assert_eq!(report.pages.len(), 5);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateService,
        ports::Filesystem,
    };
    pub use crate::domain::{
        ContentBundle, ContentLibrary, Feature, FeatureSet, FileKind, MarkupFlavor,
        NavigationModel, OutputFile, Page, SiteBrief, SitePlan,
    };
    pub use crate::error::{SitewrightError, SitewrightResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
