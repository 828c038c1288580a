//! Integration tests for argument parsing and fatal error reporting.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn remctl_help() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("remctl-help"));
    cmd.env("NO_COLOR", "1")
        .env("REMCTL_HELP_CONFIG", "/nonexistent/remctl-help.yaml")
        .env_remove("REMCTL_CONF_DIR")
        .env_remove("RUST_LOG");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_help_flag_lists_options() {
    remctl_help()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--manual"))
        .stdout(predicate::str::contains("--config-dir"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    remctl_help()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("remctl-help"));
}

#[test]
fn test_cli_unknown_flag_is_usage_error() {
    remctl_help().arg("--bogus").assert().code(2);
}

// --- Manual ---

#[test]
fn test_manual_prints_embedded_documentation() {
    remctl_help()
        .arg("--manual")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("remctl-help - list remctl services"));
}

#[test]
fn test_manual_does_not_read_config_dir() {
    remctl_help()
        .args(["--manual", "--config-dir", "/nonexistent/conf.d"])
        .assert()
        .success();
}

// --- Fatal errors ---

#[test]
fn test_missing_config_dir_exits_non_zero() {
    remctl_help()
        .args(["--config-dir", "/nonexistent/remctl-help/conf.d"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_config_dir_json_error_object() {
    remctl_help()
        .args(["--json", "--config-dir", "/nonexistent/remctl-help/conf.d"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(r#""error": true"#))
        .stderr(predicate::str::contains("CONFIG_DIR_MISSING"));
}

#[test]
fn test_config_dir_that_is_a_file_exits_non_zero() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    remctl_help()
        .arg("--config-dir")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot read configuration directory"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    remctl_help()
        .arg("--config-dir")
        .arg(dir.path())
        .args(["--timeout", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_malformed_settings_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = dir.path().join("settings.yaml");
    std::fs::write(&settings, "config_dir: [unclosed\n").expect("write");
    remctl_help()
        .env("REMCTL_HELP_CONFIG", &settings)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
}

// --- NO_COLOR handling ---

#[test]
fn test_no_color_env_accepts_any_non_empty_value() {
    for value in ["1", "yes", "true"] {
        remctl_help()
            .env("NO_COLOR", value)
            .arg("--manual")
            .assert()
            .success()
            .stdout(predicate::str::contains("remctl-help"));
    }
}

#[test]
fn test_no_color_env_empty_value_is_accepted() {
    remctl_help()
        .env("NO_COLOR", "")
        .arg("--manual")
        .assert()
        .success();
}
