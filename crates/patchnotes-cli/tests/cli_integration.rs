//! CLI Integration Tests
//!
//! These tests verify the CLI commands work end-to-end against notes files
//! written to a temporary directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const EXAMPLE_NOTES: &str = r#"[
    {
        "version": "1.0.0",
        "date": "2026-01-31",
        "title": "Release",
        "highlights": ["Gen 1"],
        "added": ["Feature A", "Feature B"]
    },
    {
        "version": "1.0.1",
        "date": "2026-02-07",
        "fixed": ["<b>Crash</b> on login"]
    }
]"#;

fn cli_cmd() -> Command {
    Command::cargo_bin("patchnotes").expect("Failed to find patchnotes binary")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_to_stdout() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", EXAMPLE_NOTES);

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div id=\"list\" class=\"list\">"))
        .stdout(predicate::str::contains("<span class=\"ver\">v1.0.0</span>"))
        .stdout(predicate::str::contains("<span class=\"title\">Patch notes</span>"))
        .stdout(predicate::str::contains("&lt;b&gt;Crash&lt;/b&gt; on login"))
        .stdout(predicate::str::contains("aria-expanded=\"true\"").not());
}

#[test]
fn test_render_to_file() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", EXAMPLE_NOTES);
    let output = dir.path().join("list.html");

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("render")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 release entries"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<article class=\"item\">").count(), 2);
}

#[test]
fn test_render_missing_container_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", EXAMPLE_NOTES);

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .args(["render", "--container", "changelog"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("List container not found"));
}

#[test]
fn test_render_missing_container_reported_once() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", EXAMPLE_NOTES);

    let output = cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .args(["render", "--container", "changelog"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("changelog").count(), 1, "stderr: {}", stderr);
}

#[test]
fn test_render_builtin_notes() {
    cli_cmd()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.0.0"))
        .stdout(predicate::str::contains("Adicionado"));
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_summary() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", EXAMPLE_NOTES);

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.0.0 \u{2014} Release \u{2014} 31 jan 2026"))
        .stdout(predicate::str::contains("  * Gen 1"))
        .stdout(predicate::str::contains("  [Added]\n    - Feature A\n    - Feature B"))
        .stdout(predicate::str::contains("v1.0.1 \u{2014} Patch notes \u{2014} 07 feb 2026"))
        .stdout(predicate::str::contains("[Changed]").not());
}

#[test]
fn test_list_with_config_override() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", EXAMPLE_NOTES);
    let config = write_file(
        &dir,
        "config.json",
        r#"{"defaultTitle": "Notas de atualização", "locale": "pt-BR"}"#,
    );

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.0.1 \u{2014} Notas de atualização \u{2014} 07 fev 2026"))
        .stdout(predicate::str::contains("[Adicionado]"))
        .stdout(predicate::str::contains("[Corrigido]"));
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", "[]");

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No release notes."));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(
        &dir,
        "notes.json",
        r#"[{"version": "1.0.0", "date": "2026-01-31", "title": "Release"},
            {"version": "1.0.0", "date": "someday", "title": "Again"}]"#,
    );

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 2"))
        .stdout(predicate::str::contains("Warnings: 2"))
        .stdout(predicate::str::contains("version v1.0.0 appears more than once"))
        .stdout(predicate::str::contains("date 'someday' is not YYYY-MM-DD"));
}

#[test]
fn test_check_clean_file() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(
        &dir,
        "notes.json",
        r#"[{"version": "1.0.0", "date": "2026-01-31", "title": "Release"}]"#,
    );

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No warnings."));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_missing_notes_file() {
    cli_cmd()
        .args(["--notes", "/nonexistent/notes.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load notes"));
}

#[test]
fn test_invalid_json() {
    let dir = TempDir::new().unwrap();
    let notes = write_file(&dir, "notes.json", "[{");

    cli_cmd()
        .arg("--notes")
        .arg(&notes)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}
