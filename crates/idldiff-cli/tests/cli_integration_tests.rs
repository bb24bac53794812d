//! CLI integration tests
//!
//! These tests run the built binary against documents written to a temp dir.

use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_documents(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let left = temp_dir.path().join("webkit.json");
    let right = temp_dir.path().join("blink.json");

    fs::write(
        &left,
        serde_json::to_vec(&json!({
            "Node": {
                "attributes": [
                    {"name": "nodeName", "idl_type": {"base_type": "DOMString"},
                     "is_static": false, "is_read_only": true}
                ],
                "constants": [],
                "operations": []
            },
            "Same": {
                "attributes": [
                    {"name": "x", "idl_type": {"base_type": "long"},
                     "is_static": false, "is_read_only": false}
                ]
            }
        }))
        .unwrap(),
    )
    .unwrap();

    fs::write(
        &right,
        serde_json::to_vec(&json!({
            "Node": {
                "attributes": [],
                "constants": [],
                "operations": [
                    {"name": "normalize", "idl_type": {"base_type": "void"},
                     "is_static": false, "arguments": []}
                ]
            },
            "Same": {
                "attributes": [
                    {"name": "x", "idl_type": {"base_type": "long"},
                     "is_static": false, "is_read_only": false}
                ]
            },
            "Window": {}
        }))
        .unwrap(),
    )
    .unwrap();

    (left, right)
}

fn run(temp_dir: &TempDir, args: &[&str]) -> Output {
    let (left, right) = write_documents(temp_dir);
    Command::new(env!("CARGO_BIN_EXE_idldiff"))
        .current_dir(temp_dir.path())
        .args(args)
        .args([
            "--left",
            left.to_str().unwrap(),
            "--right",
            right.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_names_lists_union() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["names"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["Node", "Same", "Window"]);
}

#[test]
fn test_cli_names_changed_only() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["names", "--changed-only"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["Node"]);
}

#[test]
fn test_cli_show_text() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["show", "Node"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("== Node =="));
    assert!(stdout.contains("- readonly DOMString nodeName;"));
    assert!(stdout.contains("+ void normalize();"));
    assert!(stdout.contains("(not computed)"));
}

#[test]
fn test_cli_show_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["show", "Node", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "Node");
    assert_eq!(value[0]["operations"]["right"][0]["annotation"], "added");
}

#[test]
fn test_cli_show_unknown_interface_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["show", "Nope"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERR_NOT_FOUND"));
}

#[test]
fn test_cli_report_changed_only_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["report", "--changed-only", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Node"]);
}

#[test]
fn test_cli_report_keeps_stderr_clean_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let (left, right) = write_documents(&temp_dir);
    let output = Command::new(env!("CARGO_BIN_EXE_idldiff"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .args(["report", "--left", left.to_str().unwrap(), "--right", right.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("== Window =="));
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

#[test]
fn test_cli_missing_document_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_idldiff"))
        .current_dir(temp_dir.path())
        .args(["names", "--left", "absent.json", "--right", "absent.json"])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERR_IO"));
}
