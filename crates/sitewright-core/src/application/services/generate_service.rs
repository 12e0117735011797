//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Derive the page set from the brief's features
//! 2. Resolve content for every page
//! 3. Compose markup and stylesheets, checking class coverage
//! 4. Write the plan to the filesystem
//!
//! Steps 1-3 are pure and available on their own as [`GenerateService::plan`],
//! which is what `--dry-run` uses. Only step 4 touches a port.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        compose, derive_pages, ContentLibrary, DomainError, DomainValidator, FileKind,
        MarkupFlavor, NavigationModel, Page, SiteBrief, SitePlan, FALLBACK_TAG,
    },
    error::SitewrightResult,
};

/// Summary of a completed generation run, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Absolute root the site was written under.
    pub root: PathBuf,
    /// Pages generated, in navigation order.
    pub pages: Vec<Page>,
    pub files_written: usize,
    pub directories_created: usize,
    /// Content profile the copy came from (`"default"` when the brief's
    /// industry had no profile of its own).
    pub profile_tag: String,
}

impl GenerateReport {
    pub fn used_fallback_content(&self) -> bool {
        self.profile_tag == FALLBACK_TAG
    }
}

/// Main generation service.
///
/// Owns the content library and the filesystem port; everything else it needs
/// arrives with the brief.
pub struct GenerateService {
    library: ContentLibrary,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(library: ContentLibrary, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            library,
            filesystem,
        }
    }

    /// Plan a site without writing anything.
    ///
    /// Runs the full pipeline short of I/O, including every validation the
    /// real run performs, so a clean plan means a clean generate.
    #[instrument(skip_all, fields(project = %brief.project_name()))]
    pub fn plan(&self, brief: &SiteBrief, output_root: impl AsRef<Path>) -> SitewrightResult<SitePlan> {
        self.assemble(brief, output_root.as_ref())
            .map(|(plan, _, _)| plan)
    }

    /// Generate a site: plan it, then write it out.
    ///
    /// The output root and any missing parent directories are created. Files
    /// that already exist are replaced. A filesystem fault aborts the run and
    /// leaves prior writes in place; nothing is rolled back.
    #[instrument(
        skip_all,
        fields(
            project = %brief.project_name(),
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        brief: &SiteBrief,
        output_root: impl AsRef<Path>,
    ) -> SitewrightResult<GenerateReport> {
        let (plan, pages, profile_tag) = self.assemble(brief, output_root.as_ref())?;

        let directories_created = self.create_directories(&plan)?;
        let files_written = self.write_files(&plan)?;

        info!(
            files = files_written,
            pages = pages.len(),
            "Site generated"
        );

        Ok(GenerateReport {
            root: plan.root().to_path_buf(),
            pages,
            files_written,
            directories_created,
            profile_tag,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run the pure pipeline: derive, resolve, compose, validate.
    fn assemble(
        &self,
        brief: &SiteBrief,
        output_root: &Path,
    ) -> SitewrightResult<(SitePlan, Vec<Page>, String)> {
        brief.validate()?;

        // 1. Derive the page set
        let pages = derive_pages(brief.features());
        info!(pages = pages.len(), "Page set derived");

        // 2. One navigation model feeds both the navbar and the router
        let nav = NavigationModel::from_pages(&pages);

        // 3. Resolve content
        let bundle = self.library.resolve(
            brief.industry(),
            brief.business_name(),
            brief.description(),
            &pages,
        );
        if bundle.profile_tag() == FALLBACK_TAG && !brief.industry().is_empty() {
            warn!(
                industry = brief.industry(),
                "No content profile for this industry, using the default catalog"
            );
        }
        DomainValidator::validate_bundle(&bundle, &pages)?;

        // 4. Compose and validate every artifact
        let flavor = brief.flavor();
        let mut plan = SitePlan::new(output_root);

        let (app, app_css) = compose::compose_router(&nav, flavor);
        DomainValidator::validate_coverage(&app, &app_css)?;
        plan.add_file(app_path(flavor), app.render(), FileKind::Config);
        plan.add_file(app_style_path(flavor), app_css.render(), FileKind::Stylesheet);

        let (navbar, navbar_css) = compose::compose_navbar(&nav, brief.business_name(), flavor);
        DomainValidator::validate_coverage(&navbar, &navbar_css)?;
        plan.add_file(navbar_path(flavor), navbar.render(), FileKind::Markup);
        plan.add_file(
            navbar_style_path(flavor),
            navbar_css.render(),
            FileKind::Stylesheet,
        );

        let shared = compose::shared_stylesheet();
        let mut shared_needed = false;
        for &page in &pages {
            let content = bundle
                .get(page)
                .ok_or_else(|| DomainError::MissingPageContent {
                    page: page.to_string(),
                })?;
            let artifact = compose::compose_page(page, content, &nav, flavor);

            match &artifact.stylesheet {
                Some(sheet) => {
                    DomainValidator::validate_coverage(&artifact.component, sheet)?;
                    plan.add_file(
                        page_style_path(page, flavor),
                        sheet.render(),
                        FileKind::Stylesheet,
                    );
                }
                None => {
                    DomainValidator::validate_coverage(&artifact.component, &shared)?;
                    shared_needed = true;
                }
            }
            plan.add_file(
                page_path(page, flavor),
                artifact.component.render(),
                FileKind::Markup,
            );
        }
        if shared_needed {
            plan.add_file(
                shared_style_path(flavor),
                shared.render(),
                FileKind::Stylesheet,
            );
        }

        plan.validate()?;
        Ok((plan, pages, bundle.profile_tag().to_string()))
    }

    /// Create the output root and every parent directory the plan needs.
    fn create_directories(&self, plan: &SitePlan) -> SitewrightResult<usize> {
        self.filesystem.create_dir_all(plan.root())?;
        let dirs = plan.parent_dirs();
        for dir in &dirs {
            self.filesystem.create_dir_all(&plan.root().join(dir))?;
        }
        Ok(dirs.len() + 1)
    }

    fn write_files(&self, plan: &SitePlan) -> SitewrightResult<usize> {
        let mut written = 0;
        for file in plan.files() {
            let path = plan.root().join(file.path.as_path());
            self.filesystem.write_file(&path, &file.content)?;
            written += 1;
        }
        Ok(written)
    }
}

// ── Generated tree layout ────────────────────────────────────────────────────
//
// src/App.jsx            router and page wiring
// src/App.css
// src/components/Navbar.jsx
// src/components/Navbar.css
// src/pages/<Page>.jsx   one per derived page
// src/pages/<Page>.css   pages with their own layout
// src/pages/pages.css    shared by the standard layout

fn app_path(flavor: MarkupFlavor) -> String {
    format!("src/App.{}", flavor.component_extension())
}

fn app_style_path(flavor: MarkupFlavor) -> String {
    format!("src/App.{}", flavor.stylesheet_extension())
}

fn navbar_path(flavor: MarkupFlavor) -> String {
    format!("src/components/Navbar.{}", flavor.component_extension())
}

fn navbar_style_path(flavor: MarkupFlavor) -> String {
    format!("src/components/Navbar.{}", flavor.stylesheet_extension())
}

fn page_path(page: Page, flavor: MarkupFlavor) -> String {
    format!(
        "src/pages/{}.{}",
        page.component_name(),
        flavor.component_extension()
    )
}

fn page_style_path(page: Page, flavor: MarkupFlavor) -> String {
    format!(
        "src/pages/{}.{}",
        page.component_name(),
        flavor.stylesheet_extension()
    )
}

fn shared_style_path(flavor: MarkupFlavor) -> String {
    format!("src/pages/pages.{}", flavor.stylesheet_extension())
}
