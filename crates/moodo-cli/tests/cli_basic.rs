//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given data directory.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "moodo-cli", "--"])
        .args(args)
        .env("MOODO_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

#[test]
fn mood_log_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(dir.path(), &["mood", "log", "7", "--tags", "walk,sun"]);
    assert!(stdout.contains("Logged mood 7"));

    let stdout = run_cli_success(dir.path(), &["mood", "list"]);
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["value"], 7);
}

#[test]
fn mood_log_rejects_out_of_scale() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["mood", "log", "11"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error"));
}

#[test]
fn suggest_accept_flow() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["mood", "log", "9"]);

    let stdout = run_cli_success(
        dir.path(),
        &["suggest", "next", "--time-of-day", "morning", "--json"],
    );
    let surfaced: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let surfaced = surfaced.as_array().unwrap();
    assert!(!surfaced.is_empty(), "seeded catalog should yield suggestions");
    let suggestion_id = surfaced[0]["suggestion_id"].as_str().unwrap();

    let stdout = run_cli_success(dir.path(), &["suggest", "accept", suggestion_id]);
    assert!(stdout.contains("Task created:"));

    let stdout = run_cli_success(dir.path(), &["task", "list"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    let stdout = run_cli_success(dir.path(), &["suggest", "history"]);
    let history: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let accepted = history
        .as_array()
        .unwrap()
        .iter()
        .filter(|record| record["accepted"] == true)
        .count();
    assert_eq!(accepted, 1);
}

#[test]
fn suggest_accept_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["suggest", "accept", "no-such-id"]);
    assert_ne!(code, 0);
}

#[test]
fn template_list_is_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(dir.path(), &["template", "list"]);
    let templates: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(templates.as_array().unwrap().len(), 20);
}

#[test]
fn builtin_template_delete_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(dir.path(), &["template", "list"]);
    let templates: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = templates[0]["id"].as_str().unwrap().to_string();

    let (_, stderr, code) = run_cli(dir.path(), &["template", "delete", &id]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Built-in"));
}

#[test]
fn user_template_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        dir.path(),
        &[
            "template",
            "create",
            "Sketching",
            "--category",
            "creative",
            "--difficulty",
            "2",
            "--minutes",
            "40",
            "--mood-range",
            "5-9",
        ],
    );
    assert!(stdout.contains("Template created:"));
    let id_line = stdout.lines().next().unwrap();
    let id = id_line.trim_start_matches("Template created: ").to_string();

    run_cli_success(dir.path(), &["template", "delete", &id]);
}

#[test]
fn journal_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["journal", "add", "a quiet day"]);
    let stdout = run_cli_success(dir.path(), &["journal", "list"]);
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["text"], "a quiet day");
}

#[test]
fn config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(dir.path(), &["config", "get", "suggestions.max_suggestions"]);
    assert_eq!(stdout.trim(), "5");

    run_cli_success(dir.path(), &["config", "set", "suggestions.max_suggestions", "3"]);
    let stdout = run_cli_success(dir.path(), &["config", "get", "suggestions.max_suggestions"]);
    assert_eq!(stdout.trim(), "3");
}

#[test]
fn label_list_is_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(dir.path(), &["label", "list", "--group", "Energy"]);
    let labels: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(labels.as_array().unwrap().len(), 3);
}
