//! Integration tests for the recase CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn recase() -> Command {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.env_remove("RECASE_CONFIG");
    cmd
}

#[test]
fn test_convert_text_argument() {
    recase()
        .args(["convert", "-c", "snake", "Hello World"])
        .assert()
        .success()
        .stdout("hello_world\n");
}

#[test]
fn test_convert_alias_and_command_name() {
    recase()
        .args(["c", "--case", "pascalCase", "user-account_id"])
        .assert()
        .success()
        .stdout("UserAccountId\n");
}

#[test]
fn test_each_argument_is_a_selection() {
    recase()
        .args(["convert", "-c", "kebab", "fooBar", "BAZ qux"])
        .assert()
        .success()
        .stdout("foo-bar\nbaz-qux\n");
}

#[test]
fn test_convert_stdin() {
    recase()
        .args(["convert", "-c", "constant"])
        .write_stdin("max retry count\n")
        .assert()
        .success()
        .stdout("MAX_RETRY_COUNT\n");
}

#[test]
fn test_sentence_case_file() {
    recase()
        .args(["convert", "-c", "sentence", "-i"])
        .arg(fixture_path("sentences.txt"))
        .assert()
        .success()
        .stdout("The quick brown fox. It jumped! What next? Pi is 3. 14\n");
}

#[test]
fn test_line_mode_keeps_blank_lines() {
    recase()
        .args(["convert", "-c", "camel", "-s", "line", "-i"])
        .arg(fixture_path("identifiers.txt"))
        .assert()
        .success()
        .stdout("firstName\nlastName\n\nhttpStatusCode\n");
}

#[test]
fn test_config_file_supplies_defaults() {
    recase()
        .args(["convert", "--config"])
        .arg(fixture_path("kebab-lines.toml"))
        .arg("-i")
        .arg(fixture_path("identifiers.txt"))
        .assert()
        .success()
        .stdout("first-name\nlast-name\n\nhttp-status-code\n");
}

#[test]
fn test_config_from_environment() {
    recase()
        .env("RECASE_CONFIG", fixture_path("kebab-lines.toml"))
        .args(["convert", "someValue"])
        .assert()
        .success()
        .stdout("some-value\n");
}

#[test]
fn test_missing_case_fails() {
    recase()
        .args(["convert", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No case style given"));
}

#[test]
fn test_unknown_case_fails() {
    recase()
        .args(["convert", "-c", "train", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case style 'train'"));
}

#[test]
fn test_empty_selection_warns_and_keeps_text() {
    recase()
        .args(["convert", "-c", "snake", "hello world", "--"])
        .assert()
        .success()
        .stdout("hello_world\n--\n")
        .stderr(predicate::str::contains(
            "Please select a non-empty text to change case!",
        ));
}

#[test]
fn test_quiet_suppresses_warnings() {
    recase()
        .args(["convert", "-q", "-c", "snake", "hello world", "--"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_all_selections_failing_is_an_error() {
    recase()
        .args(["convert", "-c", "camel", "__", "- -"])
        .assert()
        .failure()
        .stdout("__\n- -\n")
        .stderr(predicate::str::contains("All 2 selection(s) failed"));
}

#[test]
fn test_empty_stdin_fails() {
    recase()
        .args(["convert", "-c", "upper"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty text"));
}

#[test]
fn test_json_output() {
    let output = recase()
        .args(["convert", "-c", "start", "-f", "json", "hello big_world", "  "])
        .output()
        .unwrap();

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["source"], "arg#1");
    assert_eq!(records[0]["index"], 1);
    assert_eq!(records[0]["input"], "hello big_world");
    assert_eq!(records[0]["output"], "Hello Big_world");
    assert_eq!(
        records[1]["error"],
        "Please select a non-empty text to change case!"
    );
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    recase()
        .args(["convert", "-c", "upper", "-o"])
        .arg(&output_file)
        .arg("straße")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "STRASSE\n");
}

#[test]
fn test_glob_pattern() {
    recase()
        .args(["convert", "-q", "-c", "lower", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("http-status-code"))
        .stdout(predicate::str::contains("pi is 3.14"));
}

#[test]
fn test_invalid_file() {
    recase()
        .args(["convert", "-c", "lower", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_unmatched_glob() {
    recase()
        .args(["convert", "-c", "lower", "-i", "tests/fixtures/*.none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_threads_invalid_zero() {
    recase()
        .args(["convert", "-c", "lower", "-t", "0", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Thread count must be greater than 0",
        ));
}

#[test]
fn test_help_command() {
    recase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert text between case styles"));
}

#[test]
fn test_list_cases() {
    recase()
        .args(["list", "cases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("constant"))
        .stdout(predicate::str::contains("Sentence case"));
}

#[test]
fn test_list_formats() {
    recase()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("recase.toml");

    recase()
        .args(["generate-config", "-o"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    recase()
        .args(["validate", "-c"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"));
}

#[test]
fn test_validate_rejects_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[output]\ncolour = true\n").unwrap();

    recase()
        .args(["validate", "-c"])
        .arg(&config_file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"));
}
