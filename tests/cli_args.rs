//! Tests for CLI argument parsing against the built binary.

use std::io::Write;
use std::process::Command;

fn mvpterm_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mvpterm"))
}

#[test]
fn help_lists_options() {
    let output = mvpterm_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn version_prints_package_version() {
    let output = mvpterm_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_fails() {
    let output = mvpterm_cmd()
        .arg("--flavour")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--flavour"));
}

#[test]
fn invalid_config_fails_before_touching_the_terminal() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[ui]\ntick_rate_ms = 0").expect("Failed to write config");

    let output = mvpterm_cmd()
        .arg("--config")
        .arg(file.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}
