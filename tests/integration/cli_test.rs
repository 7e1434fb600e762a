//! CLI smoke tests for the termgate binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn termgate() -> Command {
    Command::cargo_bin("termgate").unwrap()
}

#[test]
fn help_lists_the_subcommands() {
    termgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints_the_crate_version() {
    termgate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_honors_the_explicit_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");

    termgate()
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_show_prints_defaults_for_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    termgate()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("passphrase = \"demo\""))
        .stdout(predicate::str::contains("tick_ms = 15"));
}

#[test]
fn config_show_reads_an_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gate]\npassphrase = \"hunter2\"\n").unwrap();

    termgate()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn broken_config_fails_with_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not toml at all [").unwrap();

    termgate()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn completions_emit_something_for_bash() {
    termgate()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termgate"));
}
