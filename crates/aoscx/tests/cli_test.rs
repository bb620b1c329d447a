//! Integration tests for the `aoscx` CLI binary.
//!
//! These tests cover argument parsing, help output, shell completions,
//! profile handling and error exit codes without a live switch.
#![allow(clippy::unwrap_used)]

use std::io::Write as _;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `aoscx` binary with env isolation.
///
/// Clears all `AOSCX_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn aoscx_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("aoscx");
    cmd.env("HOME", "/tmp/aoscx-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/aoscx-cli-test-nonexistent")
        .env_remove("AOSCX_PROFILE")
        .env_remove("AOSCX_CONFIG")
        .env_remove("AOSCX_HOST")
        .env_remove("AOSCX_USERNAME")
        .env_remove("AOSCX_PASSWORD")
        .env_remove("AOSCX_API_VERSION")
        .env_remove("AOSCX_OUTPUT")
        .env_remove("AOSCX_INSECURE")
        .env_remove("AOSCX_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const PROFILES: &str = r#"
default_profile = "lab"

[profiles.lab]
host = "10.0.0.5"
username = "admin"

[profiles.core]
host = "core.example.net"
username = "netops"
"#;

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = aoscx_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    aoscx_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("AOS-CX")
            .and(predicate::str::contains("facts"))
            .and(predicate::str::contains("lldp"))
            .and(predicate::str::contains("environment")),
    );
}

#[test]
fn test_version_flag() {
    aoscx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aoscx"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    aoscx_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    aoscx_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Argument errors ─────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = aoscx_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_config_rejects_unknown_retrieve() {
    aoscx_cmd()
        .args(["config", "--retrieve", "merged"])
        .assert()
        .code(2);
}

#[test]
fn test_lldp_interface_requires_detail() {
    aoscx_cmd().args(["lldp", "1/1/1"]).assert().code(2);
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_facts_without_switch() {
    let output = aoscx_cmd().arg("facts").output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(
        text.contains("No switch configured"),
        "Expected missing-config diagnostic:\n{text}"
    );
}

#[test]
fn test_unknown_profile() {
    let file = config_file(PROFILES);
    let output = aoscx_cmd()
        .args(["--config", file.path().to_str().unwrap()])
        .args(["--profile", "edge", "facts"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(text.contains("edge"), "Expected profile name:\n{text}");
    assert!(text.contains("core, lab"), "Expected available profiles:\n{text}");
}

#[test]
fn test_unreachable_switch() {
    let output = aoscx_cmd()
        .args(["--host", "127.0.0.1:1", "--username", "admin", "--password", "pw"])
        .args(["--timeout", "5", "facts"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
    let text = combined_output(&output);
    assert!(
        text.contains("Could not connect"),
        "Expected connection diagnostic:\n{text}"
    );
}

// ── Profiles ────────────────────────────────────────────────────────

#[test]
fn test_profiles_list_marks_default() {
    let file = config_file(PROFILES);
    aoscx_cmd()
        .args(["--config", file.path().to_str().unwrap(), "profiles", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("lab")
                .and(predicate::str::contains("core.example.net"))
                .and(predicate::str::contains("*")),
        );
}

#[test]
fn test_profiles_list_json() {
    let file = config_file(PROFILES);
    let output = aoscx_cmd()
        .args(["--config", file.path().to_str().unwrap()])
        .args(["--output", "json", "profiles", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let profiles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(profiles[0]["name"], "core");
    assert_eq!(profiles[0]["default"], false);
    assert_eq!(profiles[1]["name"], "lab");
    assert_eq!(profiles[1]["default"], true);
}

#[test]
fn test_profiles_list_empty() {
    let file = config_file("");
    aoscx_cmd()
        .args(["--config", file.path().to_str().unwrap(), "profiles", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_set_password_needs_terminal_or_flag() {
    let file = config_file(PROFILES);
    aoscx_cmd()
        .args(["--config", file.path().to_str().unwrap()])
        .args(["profiles", "set-password", "--name", "lab"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a terminal"));
}
