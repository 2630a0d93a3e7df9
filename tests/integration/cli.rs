//! The `setsift` binary, end to end.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use crate::common::{ROSTER_A, ROSTER_B};

fn setsift() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_setsift"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

// ============================================================================
// analyze
// ============================================================================

#[test]
fn test_analyze_json_uses_file_stems() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "club_a.txt", ROSTER_A);
    let b = write_file(&dir, "club_b.txt", ROSTER_B);

    let output = setsift()
        .args(["analyze", "--json"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["group_names"], serde_json::json!(["club_a", "club_b"]));
    assert_eq!(json["intersections"]["club_a ∩ club_b"]["count"], 2);
}

#[test]
fn test_analyze_explicit_names_and_report() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "x\ny\n");
    let b = write_file(&dir, "b.txt", "y\nz\n");

    let output = setsift()
        .args(["analyze", "--name", "Left", "--name", "Right"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EXACT COMBINATIONS"));
    assert!(stdout.contains("Left ∩ Right"));
    assert!(stdout.contains("Left→Right"));
    assert!(stdout.contains("50.00%"));
}

#[test]
fn test_analyze_duplicate_names_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "x\n");
    let b = write_file(&dir, "b.txt", "y\n");

    let output = setsift()
        .args(["analyze", "-n", "Same", "-n", "Same"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate group name"));
}

#[test]
fn test_analyze_empty_files_fail() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "\n\n");

    let output = setsift().arg("analyze").arg(&a).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least one group must contain data"));
}

#[test]
fn test_analyze_threshold_validated() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "x\n");

    let output = setsift()
        .args(["analyze", "--threshold", "150"])
        .arg(&a)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("threshold must be between 0 and 100"));
}

// ============================================================================
// serve-json
// ============================================================================

#[test]
fn test_serve_json_success() {
    let body = r#"{"num_groups": 2, "group_0_name": "A", "group_0_data": "x\ny", "group_1_name": "B", "group_1_data": "y\nz"}"#;
    let output = run_with_stdin(
        {
            let mut cmd = setsift();
            cmd.arg("serve-json");
            cmd
        },
        body,
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["coverage_matrix"]["A→B"]["percentage"], 50.0);
    assert_eq!(json["unique_items"]["B"]["items"], serde_json::json!(["z"]));
}

#[test]
fn test_serve_json_error_body() {
    let output = run_with_stdin(
        {
            let mut cmd = setsift();
            cmd.arg("serve-json");
            cmd
        },
        r#"{"num_groups": 2}"#,
    );
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "at least one group must contain data" }));
    assert!(String::from_utf8_lossy(&output.stderr).contains("400"));
}

// ============================================================================
// score / parse
// ============================================================================

#[test]
fn test_score_shows_romanization() {
    let output = setsift()
        .args(["score", "건국대학교", "Konkuk University"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ROMANIZATION"));
    assert!(stdout.contains("geongukdaehakgyo"));
    assert!(stdout.contains("geonguk"));
    assert!(stdout.contains("university"));
}

#[test]
fn test_score_threshold_opens_bridge() {
    let run = |threshold: &str| {
        let output = setsift()
            .args(["score", "--threshold", threshold, "건국대학교", "Konkuk University"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    // "geonguk university" vs "konkuk university" once the gate is open
    assert!(run("60").contains("[ 88]"));
    assert!(!run("75").contains("[ 88]"));
}

#[test]
fn test_parse_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "list.txt", "b\na\n\"c\nd\"\na\n");

    let output = setsift().arg("parse").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nb\nc d\n");
}

#[test]
fn test_parse_stdin() {
    let output = run_with_stdin(
        {
            let mut cmd = setsift();
            cmd.arg("parse");
            cmd
        },
        "x\r\ny\r\n",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "x\ny\n");
}
