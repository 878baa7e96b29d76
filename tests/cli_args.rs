//! Tests for CLI argument parsing against the built binary.

use std::process::Command;

fn tally_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tally"))
}

#[test]
fn test_help_shows_overrides() {
    let output = tally_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--endpoint"));
    assert!(stdout.contains("--amount"));
    assert!(stdout.contains("serve"));
}

#[test]
fn test_serve_help_shows_options() {
    let output = tally_cmd()
        .args(["serve", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--bind"));
    assert!(stdout.contains("--delta"));
}

#[test]
fn test_invalid_endpoint_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    let output = tally_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--endpoint")
        .arg("not a url")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = tally_cmd()
        .arg("--config")
        .arg("/nonexistent/tally/config.toml")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}
