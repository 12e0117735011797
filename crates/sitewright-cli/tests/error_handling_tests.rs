//! Tests for error handling, exit codes, and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sitewright() -> Command {
    Command::cargo_bin("sitewright").unwrap()
}

#[test]
fn test_error_invalid_project_name() {
    let mut cmd = sitewright();
    cmd.args(["new", ".hidden", "--yes"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("cannot start with '.'"))
        .stderr(predicate::str::contains("corner-bakery"));
}

#[test]
fn test_error_with_suggestions_project_exists() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    let mut cmd = sitewright();
    cmd.current_dir(temp.path()).args(["new", "taken", "--yes"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Project already exists"))
        .stderr(predicate::str::contains("Use --force to replace it"))
        .stderr(predicate::str::contains("Choose a different project name"));
}

#[test]
fn test_error_missing_config_file() {
    let mut cmd = sitewright();
    cmd.args(["--config", "/definitely/not/here.toml", "list", "pages"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_unknown_config_key() {
    let mut cmd = sitewright();
    cmd.args(["config", "get", "no.such.key"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("defaults.industry"));
}

#[test]
fn test_error_invalid_config_value() {
    let temp = TempDir::new().unwrap();

    sitewright()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let mut cmd = sitewright();
    cmd.current_dir(temp.path())
        .args(["config", "set", "output.format", "xml"]);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("must be auto, human, plain, or json"));
}

#[test]
fn test_error_unknown_list_topic_is_a_usage_error() {
    let mut cmd = sitewright();
    cmd.args(["list", "nonsense"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_error_message_survives_verbose_mode() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    let mut cmd = sitewright();
    cmd.current_dir(temp.path())
        .args(["-v", "new", "taken", "--yes"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Project already exists"));
}
