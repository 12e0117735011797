//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sitewright",
    bin_name = "sitewright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant small-business site scaffolding",
    long_about = "Sitewright generates a styled React site from a short \
                  business brief and a set of feature flags.",
    after_help = "EXAMPLES:\n\
        \x20 sitewright new corner-bakery --business \"Corner Bakery\" --feature contact-form\n\
        \x20 sitewright new aegis --industry cyber-security --feature auth --feature booking\n\
        \x20 sitewright list features\n\
        \x20 sitewright completions bash > /usr/share/bash-completion/completions/sitewright",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new site project.
    #[command(
        visible_alias = "n",
        about = "Generate a new site",
        after_help = "EXAMPLES:\n\
            \x20 sitewright new corner-bakery --business \"Corner Bakery\" --feature gallery\n\
            \x20 sitewright new clinic --industry healthcare --feature booking --feature contact-form\n\
            \x20 sitewright new shop --industry e-commerce --feature payments --dry-run"
    )]
    New(NewArgs),

    /// List industries, features, or pages.
    #[command(
        visible_alias = "ls",
        about = "List available industries, features, or pages",
        after_help = "EXAMPLES:\n\
            \x20 sitewright list industries\n\
            \x20 sitewright list features\n\
            \x20 sitewright list pages --format json"
    )]
    List(ListArgs),

    /// Initialise a Sitewright configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sitewright init           # default location\n\
            \x20 sitewright init --global  # global config\n\
            \x20 sitewright init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sitewright completions bash > ~/.local/share/bash-completion/completions/sitewright\n\
            \x20 sitewright completions zsh  > ~/.zfunc/_sitewright\n\
            \x20 sitewright completions fish > ~/.config/fish/completions/sitewright.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Sitewright configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sitewright config get defaults.industry\n\
            \x20 sitewright config set defaults.industry restaurant\n\
            \x20 sitewright config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sitewright new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `../sites/cafe` places the project there instead.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Business display name, spliced into generated copy.  Defaults to the
    /// project name.
    #[arg(
        short = 'b',
        long = "business",
        value_name = "NAME",
        help = "Business display name (default: project name)"
    )]
    pub business: Option<String>,

    /// One-sentence business description for hero sections.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Short business description"
    )]
    pub description: Option<String>,

    /// Industry tag used to pick a content profile.
    #[arg(
        short = 'i',
        long = "industry",
        value_name = "TAG",
        help = "Industry tag (e.g. restaurant, healthcare)"
    )]
    pub industry: Option<String>,

    /// Feature flag; repeat for each feature.  Unknown tags are ignored with
    /// a warning.
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "TAG",
        action = clap::ArgAction::Append,
        help = "Enable a feature (repeatable)"
    )]
    pub features: Vec<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Remove an existing directory and regenerate from scratch (destructive).
    #[arg(long = "force", help = "Replace an existing directory")]
    pub force: bool,

    /// Preview the file plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sitewright list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list.
    #[arg(value_enum, help = "What to list")]
    pub topic: ListTopic,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Catalog the `list` command can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTopic {
    /// Built-in industry content profiles.
    Industries,
    /// Feature flags and the pages they add.
    Features,
    /// Every page the generator knows about.
    Pages,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sitewright init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", conflicts_with = "local", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.sitewright.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sitewright completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sitewright config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.industry`.
        key: String,
    },
    /// Set a configuration key and write the file back.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
