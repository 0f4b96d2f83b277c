//! CLI end-to-end tests.
//!
//! Each test runs the `jslext` binary from an empty temporary directory with
//! `HOME` and `XDG_CONFIG_HOME` pointed at it, so no user configuration is
//! picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to a fixture file
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build an isolated `jslext` command
fn jslext(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jslext"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("JSLEXT_CONFIG")
        .env_remove("JSLEXT_VERBOSE")
        .env_remove("JSLEXT_NO_COLOR")
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("table")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jslext"));
}

#[test]
fn test_table_prints_rows() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .arg("table")
        .arg(fixture("sample.js"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Lexeme Table:\n"))
        .stdout(predicate::str::contains("|   function |                   KEYWORD |"))
        .stdout(predicate::str::contains("|       0x1F |          NUMERIC_CONSTANT |"))
        .stdout(predicate::str::contains("COMMENT"))
        .stdout(predicate::str::contains("==>").not());
}

#[test]
fn test_table_json() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = jslext(&home)
        .args(["table", "--format", "json"])
        .arg(fixture("sample.js"))
        .output()
        .expect("Failed to run jslext");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value[0]["kind"], "COMMENT");
    assert_eq!(value[1]["text"], "function");
    assert_eq!(value[1]["span"]["line"], 2);
}

#[test]
fn test_table_several_files_in_argument_order() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let first = home.path().join("first.js");
    let second = home.path().join("second.js");
    std::fs::write(&first, "x").unwrap();
    std::fs::write(&second, "y").unwrap();

    let output = jslext(&home)
        .args(["--jobs", "2", "table"])
        .arg(&second)
        .arg(&first)
        .output()
        .expect("Failed to run jslext");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let second_at = stdout.find("second.js <==").expect("second header");
    let first_at = stdout.find("first.js <==").expect("first header");
    assert!(second_at < first_at);
    assert_eq!(stdout.matches("Lexeme Table:").count(), 2);
}

#[test]
fn test_classes() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .arg("classes")
        .arg(fixture("sample.js"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Type: KEYWORD:\n  function\n  return\n  let\n"))
        .stdout(predicate::str::contains("Type: OPERATOR:\n  +\n  =\n"));
}

#[test]
fn test_classify() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .args(["classify", "await", "_x1", ".5", "3.", "=>", "'s'"])
        .assert()
        .success()
        .stdout(
            "await\tKEYWORD\n_x1\tIDENTIFIER\n.5\tNUMERIC_CONSTANT\n3.\tUNKNOWN\n=>\tOPERATOR\n's'\tSTRING_CONSTANT\n",
        );
}

#[test]
fn test_summary() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .arg("summary")
        .arg(fixture("sample.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("IDENTIFIER        7\n"))
        .stdout(predicate::str::contains("DELIMITER         10\n"))
        .stdout(predicate::str::ends_with("TOTAL             25\n"));
}

#[test]
fn test_summary_json_several_files() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = jslext(&home)
        .args(["summary", "-F", "json"])
        .arg(fixture("sample.js"))
        .arg(fixture("unterminated.js"))
        .output()
        .expect("Failed to run jslext");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["files"][1]["counts"]["UNKNOWN"], 1);
    assert_eq!(value["total"]["KEYWORD"], 4);
}

#[test]
fn test_unterminated_string_warns_but_succeeds() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .arg("table")
        .arg(fixture("unterminated.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("UNKNOWN"))
        .stderr(predicate::str::contains("W0101"));
}

#[test]
fn test_strict_fails_on_warning() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .args(["--strict", "table"])
        .arg(fixture("unterminated.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn test_strict_from_config_file() {
    let home = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(home.path().join("jslext.toml"), "strict = true\n").unwrap();

    jslext(&home)
        .arg("summary")
        .arg(fixture("unterminated.js"))
        .assert()
        .failure();
}

#[test]
fn test_config_table_widths() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[table]\nlexeme_width = 4\nkind_width = 10\n").unwrap();

    jslext(&home)
        .arg("--config")
        .arg(&config)
        .arg("table")
        .arg(fixture("sample.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("|    + |   OPERATOR |"));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .args(["--config", "missing.toml", "classify", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_missing_input_fails_with_path() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .args(["table", "does-not-exist.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.js"));
}

#[test]
fn test_zero_jobs_rejected() {
    let home = TempDir::new().expect("Failed to create temp directory");
    jslext(&home)
        .args(["--jobs", "0", "classify", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("jobs must be at least 1"));
}
