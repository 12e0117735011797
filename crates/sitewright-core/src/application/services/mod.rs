//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a site" or "plan a dry run".

pub mod generate_service;

pub use generate_service::{GenerateReport, GenerateService};
