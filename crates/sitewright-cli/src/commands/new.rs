//! Implementation of the `sitewright new` command.
//!
//! Responsibility: translate CLI arguments into a `SiteBrief`, call the core
//! generate service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use sitewright_adapters::{LocalFilesystem, builtin_library};
use sitewright_core::{
    application::{Filesystem as _, GenerateService},
    domain::{FeatureSet, SiteBrief, derive_pages},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `sitewright new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project name / output path
/// 2. Convert CLI args + config defaults into a core `SiteBrief`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Replace an existing directory only under `--force`
/// 5. `--dry-run` prints the file plan and exits
/// 6. Execute generation via `GenerateService`
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve project path
    let (project_name, project_dir) = resolve_project_path(&args.name)?;
    validate_project_name(&project_name)?;

    // 2. Build the brief (lenient feature parse + config defaults)
    let (brief, ignored) = build_brief(&args, &config, &project_name)?;
    for tag in &ignored {
        warn!(tag = %tag, "Unknown feature tag ignored");
        output.warning(&format!("Unknown feature '{tag}' ignored"))?;
    }

    let pages = derive_pages(brief.features());
    debug!(
        business = %brief.business_name(),
        industry = %brief.industry(),
        features = brief.features().len(),
        pages = pages.len(),
        "Brief resolved"
    );

    // 3. Show configuration and confirm
    if !output.is_quiet() && !args.yes && !args.dry_run {
        show_configuration(&brief, pages.len(), &project_dir, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Check for existing directory
    let filesystem = LocalFilesystem::new();
    if filesystem.exists(&project_dir) {
        if !args.force {
            return Err(CliError::ProjectExists { path: project_dir });
        }
        if !args.dry_run {
            info!(path = %project_dir.display(), "Removing existing directory");
            filesystem
                .remove_dir_all(&project_dir)
                .map_err(CliError::Core)?;
        }
    }

    let library = builtin_library().map_err(|e| CliError::Core(e.into()))?;
    let service = GenerateService::new(library, Box::new(filesystem));

    // 5. Dry run: plan but do not write.
    if args.dry_run {
        let plan = service.plan(&brief, &project_dir).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would write {} files under {}",
            plan.file_count(),
            project_dir.display(),
        ))?;
        for file in plan.files() {
            output.print(&format!("  {}", file.path))?;
        }
        return Ok(());
    }

    // 6. Generate
    output.header(&format!("Generating '{project_name}'..."))?;
    info!(project = %project_name, path = %project_dir.display(), "Generation started");

    let report = service
        .generate(&brief, &project_dir)
        .map_err(CliError::Core)?;

    info!(
        project = %project_name,
        files = report.files_written,
        "Generation completed"
    );

    // 7. Success + next steps
    output.success(&format!(
        "Site '{}' generated: {} pages, {} files",
        project_name,
        report.pages.len(),
        report.files_written,
    ))?;

    if report.used_fallback_content() && !brief.industry().is_empty() {
        output.warning(&format!(
            "No built-in content for industry '{}'; the default profile was used",
            brief.industry(),
        ))?;
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project_dir.display()))?;
        output.print("  # Drop src/ into your React toolchain (Vite or similar)")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Split the NAME argument into a project name and the directory to generate
/// into.  A plain name lands in `./name`; a path is used as-is with its last
/// component as the project name.
pub fn resolve_project_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: name.into(),
            reason: "cannot extract a valid project name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Brief construction ────────────────────────────────────────────────────────

/// Build the core brief from CLI args, falling back to config defaults for
/// industry and features.  Returns the ignored (unknown) feature tags so the
/// caller can warn about them.
fn build_brief(
    args: &NewArgs,
    config: &AppConfig,
    project_name: &str,
) -> CliResult<(SiteBrief, Vec<String>)> {
    let tags: &[String] = if args.features.is_empty() {
        &config.defaults.features
    } else {
        &args.features
    };
    let (features, ignored) = FeatureSet::from_tags(tags);

    let mut builder = SiteBrief::builder(project_name).features(features);
    if let Some(business) = &args.business {
        builder = builder.business_name(business);
    }
    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(industry) = args.industry.as_ref().or(config.defaults.industry.as_ref()) {
        builder = builder.industry(industry);
    }

    let brief = builder.build().map_err(|e| CliError::Core(e.into()))?;
    Ok((brief, ignored))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    brief: &SiteBrief,
    page_count: usize,
    project_dir: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", brief.project_name()))?;
    out.print(&format!("  Business:  {}", brief.business_name()))?;
    let industry = if brief.industry().is_empty() {
        "(default content)"
    } else {
        brief.industry()
    };
    out.print(&format!("  Industry:  {industry}"))?;
    let features = if brief.features().is_empty() {
        "none".to_string()
    } else {
        brief
            .features()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.print(&format!("  Features:  {features}"))?;
    out.print(&format!("  Pages:     {page_count}"))?;
    out.print(&format!("  Location:  {}", project_dir.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_project_path ──────────────────────────────────────────────────

    #[test]
    fn simple_name_is_its_own_directory() {
        let (name, dir) = resolve_project_path("my-cafe").unwrap();
        assert_eq!(name, "my-cafe");
        assert_eq!(dir, PathBuf::from("my-cafe"));
    }

    #[test]
    fn relative_path_keeps_the_full_path() {
        let (name, dir) = resolve_project_path("../sites/my-cafe").unwrap();
        assert_eq!(name, "my-cafe");
        assert_eq!(dir, PathBuf::from("../sites/my-cafe"));
    }

    #[test]
    fn nested_path_works_on_all_platforms() {
        let sep = std::path::MAIN_SEPARATOR;
        let path = format!("foo{sep}bar{sep}my-cafe");

        let (name, dir) = resolve_project_path(&path).unwrap();
        assert_eq!(name, "my-cafe");
        assert_eq!(dir, PathBuf::from("foo").join("bar").join("my-cafe"));
    }

    // ── validate_project_name ─────────────────────────────────────────────────

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_project_name(""),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_project_name(".hidden"),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["my-cafe", "my_site", "studio23", "Studio", "sitewright"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }

    // ── build_brief ───────────────────────────────────────────────────────────

    fn new_args(name: &str) -> NewArgs {
        NewArgs {
            name: name.into(),
            business: None,
            description: None,
            industry: None,
            features: Vec::new(),
            yes: true,
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn business_defaults_to_project_name() {
        let args = new_args("corner-bakery");
        let (brief, ignored) = build_brief(&args, &AppConfig::default(), "corner-bakery").unwrap();
        assert_eq!(brief.business_name(), "corner-bakery");
        assert!(ignored.is_empty());
    }

    #[test]
    fn unknown_feature_tags_are_collected_not_fatal() {
        let mut args = new_args("shop");
        args.features = vec!["payments".into(), "blockchain".into()];
        let (brief, ignored) = build_brief(&args, &AppConfig::default(), "shop").unwrap();
        assert_eq!(brief.features().len(), 1);
        assert_eq!(ignored, vec!["blockchain"]);
    }

    #[test]
    fn config_defaults_fill_missing_flags() {
        let args = new_args("clinic");
        let mut config = AppConfig::default();
        config.defaults.industry = Some("healthcare".into());
        config.defaults.features = vec!["booking".into()];

        let (brief, _) = build_brief(&args, &config, "clinic").unwrap();
        assert_eq!(brief.industry(), "healthcare");
        assert_eq!(brief.features().len(), 1);
    }

    #[test]
    fn explicit_flags_beat_config_defaults() {
        let mut args = new_args("clinic");
        args.industry = Some("legal".into());
        args.features = vec!["contact-form".into()];

        let mut config = AppConfig::default();
        config.defaults.industry = Some("healthcare".into());
        config.defaults.features = vec!["booking".into(), "chat".into()];

        let (brief, _) = build_brief(&args, &config, "clinic").unwrap();
        assert_eq!(brief.industry(), "legal");
        assert_eq!(brief.features().len(), 1);
    }
}
