//! Behavioral specs for output formats and diagnostics.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn json_output_lists_empty_files() {
    let ws = Workspace::with_files(&[("a.txt", ""), ("b.txt", "hello")]);
    let output = ws
        .cmd()
        .args(["-o", "json", "a.txt", "b.txt", "missing.txt"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "passed": false,
            "checked": 3,
            "skipped": 1,
            "empty": ["a.txt"],
        })
    );
}

#[test]
fn json_output_without_paths_keeps_stdout_parseable() {
    let ws = Workspace::with_files(&[]);
    let output = ws.cmd().args(["--output", "json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], serde_json::json!(true));
    assert_eq!(value["checked"], serde_json::json!(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: emptycheck"));
}

#[test]
fn json_output_has_no_annotations() {
    let ws = Workspace::with_files(&[("a.txt", "")]);
    ws.cmd()
        .args(["-o", "json", "a.txt"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("::error").not());
}

// =============================================================================
// Color and verbose diagnostics
// =============================================================================

#[test]
fn piped_output_is_uncolored_by_default() {
    let ws = Workspace::with_files(&[("a.txt", "x")]);
    ws.cmd()
        .arg("a.txt")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn color_always_colors_status_line() {
    let ws = Workspace::with_files(&[("a.txt", "x")]);
    ws.cmd()
        .args(["--color", "always", "a.txt"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["))
        .stdout(predicates::str::contains("All checked files have content."));
}

#[test]
fn annotations_are_never_colored() {
    let ws = Workspace::with_files(&[("a.txt", "")]);
    ws.cmd()
        .args(["--color", "always", "a.txt"])
        .assert()
        .code(1)
        .stdout(format!("{}\n", annotation("a.txt")));
}

#[test]
fn verbose_lists_files_on_stderr_only() {
    let ws = Workspace::with_files(&[("a.txt", ""), ("b.txt", "abc")]);
    ws.cmd()
        .args(["-v", "a.txt", "b.txt", "missing.txt"])
        .assert()
        .code(1)
        .stdout(format!("{}\n", annotation("a.txt")))
        .stderr(predicates::str::contains("Files:"))
        .stderr(predicates::str::contains("a.txt: empty"))
        .stderr(predicates::str::contains("b.txt: 3 bytes"))
        .stderr(predicates::str::contains("missing.txt: skipped (missing or unreadable)"));
}
