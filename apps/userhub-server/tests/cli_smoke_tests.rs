//! CLI smoke tests for the userhub-server binary.
//!
//! These verify help/version output and the `check` command without
//! starting the HTTP server.

use std::process::{Command, Stdio};

/// Helper to run the userhub-server binary with given arguments
fn run_userhub_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_userhub-server"))
        .args(args)
        .env("APP_ENV", "testing")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute userhub-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_userhub_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("userhub-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--env"), "Should mention env option");
}

#[test]
fn test_cli_version_command() {
    let output = run_userhub_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("userhub-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_userhub_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_check_command() {
    let output = run_userhub_server(&["check"]);

    assert!(output.status.success(), "Check command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("testing"), "Should report the profile");
}

#[test]
fn test_cli_print_config() {
    let output = run_userhub_server(&["--print-config"]);

    assert!(output.status.success(), "Print config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"profile\""));
    assert!(stdout.contains("\"testing\""));
    assert!(stdout.contains("sqlite::memory:"));
}

#[test]
fn test_cli_env_override() {
    let output = run_userhub_server(&["--env", "production", "check"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("production"),
        "--env should override APP_ENV"
    );
}
