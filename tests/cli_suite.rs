use assert_cmd::Command;
use predicates::prelude::*;

// Helper function to initialize the command to test.
fn pkgx() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pkgx"));
    cmd.env("NO_COLOR", "1").env_remove("PKGX_MANAGER");
    cmd
}

#[test]
fn test_help_command() {
    pkgx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Universal Package Manager"))
        .stdout(predicate::str::contains("list-managers"));
}

#[test]
fn test_no_command_prints_help() {
    pkgx()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pkgx"));
}

#[test]
fn test_version_flag() {
    let expected = format!("pkgx {}", env!("CARGO_PKG_VERSION"));

    pkgx()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_version_command() {
    let expected = format!("pkgx version {}\n", env!("CARGO_PKG_VERSION"));

    pkgx()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn test_unknown_command_fails_with_usage() {
    pkgx()
        .arg("unknown-command-xyz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: pkgx"));
}

#[test]
fn test_install_requires_packages() {
    pkgx().arg("install").assert().failure();
}

#[test]
fn test_completions_generate_script() {
    pkgx()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgx"));
}
