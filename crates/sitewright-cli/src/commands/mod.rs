//! Command handlers, one module per subcommand.
//!
//! Each handler translates parsed arguments into core calls and renders the
//! result through [`crate::output::OutputManager`].

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
