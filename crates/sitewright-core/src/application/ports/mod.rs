//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sitewright-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: File operations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (the CLI drives `GenerateService` directly)
//!
//! Content catalogs are plain data ([`crate::domain::ContentLibrary`]), not a
//! port: adapters construct one and hand it to the service by value.

pub mod output;

pub use output::Filesystem;
