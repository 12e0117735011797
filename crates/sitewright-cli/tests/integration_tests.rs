//! Integration tests for the sitewright binary.
//!
//! These run the compiled binary end-to-end: argument parsing, config
//! resolution, generation, and the on-disk tree it leaves behind.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

fn sitewright() -> Command {
    Command::cargo_bin("sitewright").unwrap()
}

/// Count regular files under a directory, recursively.
fn file_count(root: &std::path::Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}

// ── Help and version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    sitewright()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("business brief"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_version_flag() {
    sitewright()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    sitewright()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--business"))
        .stdout(predicate::str::contains("--industry"))
        .stdout(predicate::str::contains("--feature"))
        .stdout(predicate::str::contains("--dry-run"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn test_new_project_success() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args([
            "new",
            "test-site",
            "--business",
            "Sunrise Cafe",
            "--feature",
            "contact-form",
            "--feature",
            "gallery",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("generated"));

    let project = temp.path().join("test-site");
    assert!(project.join("src/App.jsx").exists());
    assert!(project.join("src/App.css").exists());
    assert!(project.join("src/components/Navbar.jsx").exists());
    assert!(project.join("src/components/Navbar.css").exists());
    assert!(project.join("src/pages/Home.jsx").exists());
    assert!(project.join("src/pages/Home.css").exists());
    assert!(project.join("src/pages/Gallery.jsx").exists());
    assert!(project.join("src/pages/pages.css").exists());

    // Home, About, Services plus the two feature pages. About and Services
    // share pages.css, so: 4 shell files + 5 components + 3 own stylesheets
    // + the shared stylesheet.
    assert_eq!(file_count(&project), 13);

    let navbar = fs::read_to_string(project.join("src/components/Navbar.jsx")).unwrap();
    assert!(navbar.contains("Sunrise Cafe"));
}

#[test]
fn test_new_project_dry_run() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["new", "preview-site", "--feature", "booking", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("src/App.jsx"));

    assert!(!temp.path().join("preview-site").exists());
}

#[test]
fn test_new_project_already_exists() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("existing-site")).unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["new", "existing-site", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_force_replaces_existing_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("rebuilt-site");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("stale.txt"), "old").unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["new", "rebuilt-site", "--yes", "--force"])
        .assert()
        .success();

    assert!(!project.join("stale.txt").exists());
    assert!(project.join("src/App.jsx").exists());
}

#[test]
fn test_unknown_feature_is_ignored_with_warning() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args([
            "new",
            "warned-site",
            "--feature",
            "gallery",
            "--feature",
            "blockchain",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown feature 'blockchain' ignored"));

    assert!(temp.path().join("warned-site/src/pages/Gallery.jsx").exists());
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["-q", "new", "hushed-site", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("hushed-site/src/App.jsx").exists());
}

#[test]
fn test_verbose_flag() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["-v", "new", "logged-site", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn test_list_features_table() {
    sitewright()
        .args(["list", "features"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available features:"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("contact-form"));
}

#[test]
fn test_list_pages_json_is_parseable() {
    let output = sitewright()
        .args(["list", "pages", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert!(!rows.is_empty());

    let home = rows
        .iter()
        .find(|row| row["page"] == "home")
        .expect("home page missing from json listing");
    assert_eq!(home["route"], "/");
    assert_eq!(home["stylesheet"], "own");
}

#[test]
fn test_list_industries_csv() {
    sitewright()
        .args(["list", "industries", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tag,name,seeded_pages"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn test_list_format_survives_quiet() {
    // Machine output must reach piped consumers even under --quiet.
    sitewright()
        .args(["-q", "list", "features", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auth"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_shell_completions() {
    sitewright()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("sitewright"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn test_config_init_set_get_roundtrip() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(temp.path().join(".sitewright.toml").exists());

    sitewright()
        .current_dir(temp.path())
        .args(["config", "set", "defaults.industry", "restaurant"])
        .assert()
        .success();

    sitewright()
        .current_dir(temp.path())
        .args(["config", "get", "defaults.industry"])
        .assert()
        .success()
        .stdout("restaurant\n");
}

#[test]
fn test_init_twice_needs_force() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    sitewright()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}
