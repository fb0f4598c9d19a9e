//! End-to-end checks of the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cohort() -> Command {
    Command::cargo_bin("cohort").expect("binary builds")
}

#[test]
fn help_lists_the_subcommands() {
    cohort()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("segments"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("snapshot"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag_reports_the_package_version() {
    cohort()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_config_passes_without_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    cohort()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn check_config_rejects_an_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cohort.toml");
    std::fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

    cohort()
        .arg("--config")
        .arg(&path)
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn preview_rejects_malformed_rules() {
    cohort()
        .args(["preview", "--rule", "age=25-34"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field:operator:value"));
}
