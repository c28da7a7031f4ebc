//! Integration tests for the `anyv` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the inspect, get,
//! and stats subcommands through the actual binary, including stdin piping,
//! file input, the `--ecma` switch and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn anyv() -> Command {
    Command::cargo_bin("anyv").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Inspect subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn inspect_stdin_prints_tree() {
    anyv()
        .arg("inspect")
        .write_stdin(r#"{"a":1,"b":[2.5,"x",null]}"#)
        .assert()
        .success()
        .stdout(
            "kMap (2)\n  a: kInt 1\n  b: kVector (3)\n    [0]: kDouble 2.5\n    [1]: kString \"x\"\n    [2]: kNull\n",
        );
}

#[test]
fn inspect_file_keeps_key_order() {
    let output = anyv()
        .args(["inspect", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "kMap (5)");
    assert_eq!(lines[1], "  name: kString \"Alice\"");
    assert_eq!(lines[2], "  age: kInt 30");
    assert_eq!(lines[3], "  ratio: kDouble 0.75");
    assert_eq!(lines[4], "  tags: kVector (2)");
    assert_eq!(lines[7], "  address: kMap (2)");
    assert_eq!(lines[9], "    zip: kNull");
}

#[test]
fn inspect_ecma_switch_changes_object_tags() {
    anyv()
        .args(["inspect", "--ecma", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kEcma (5)"))
        .stdout(predicate::str::contains("address: kEcma (2)"))
        .stdout(predicate::str::contains("kMap").not());
}

#[test]
fn inspect_scalar_document() {
    anyv()
        .arg("inspect")
        .write_stdin("42")
        .assert()
        .success()
        .stdout("kInt 42\n");
}

#[test]
fn inspect_invalid_json_fails() {
    anyv()
        .arg("inspect")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn inspect_rejects_booleans() {
    anyv()
        .arg("inspect")
        .write_stdin(r#"{"flag":true}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be represented"))
        .stderr(predicate::str::contains("boolean"));
}

#[test]
fn missing_input_file_fails() {
    anyv()
        .args(["inspect", "-i", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_nested_value() {
    anyv()
        .args(["get", "/address/city", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("\"Paris\"\n");
}

#[test]
fn get_vector_element() {
    anyv()
        .args(["get", "/tags/1", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("\"wasm\"\n");
}

#[test]
fn get_container_prints_pretty_json() {
    let output = anyv()
        .args(["get", "/address", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"city": "Paris", "zip": null}));
}

#[test]
fn get_with_ecma_switch() {
    anyv()
        .args(["get", "/x", "--ecma"])
        .write_stdin(r#"{"x":1,"y":2}"#)
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn get_missing_path_fails() {
    anyv()
        .args(["get", "/tags/5", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No value at '/tags/5'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_counts_every_kind() {
    anyv()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"kInt\s+1\n").unwrap())
        .stdout(predicate::str::is_match(r"kDouble\s+1\n").unwrap())
        .stdout(predicate::str::is_match(r"kString\s+4\n").unwrap())
        .stdout(predicate::str::is_match(r"kVector\s+1\n").unwrap())
        .stdout(predicate::str::is_match(r"kMap\s+2\n").unwrap())
        .stdout(predicate::str::is_match(r"kNull\s+1\n").unwrap())
        .stdout(predicate::str::is_match(r"kEcma\s+0\n").unwrap())
        .stdout(predicate::str::is_match(r"nodes\s+10\n").unwrap())
        .stdout(predicate::str::is_match(r"depth\s+3\n").unwrap());
}

#[test]
fn stats_with_ecma_moves_object_counts() {
    anyv()
        .args(["stats", "--ecma", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"kMap\s+0\n").unwrap())
        .stdout(predicate::str::is_match(r"kEcma\s+2\n").unwrap());
}

// ─────────────────────────────────────────────────────────────────────────────
// General
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    anyv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn unknown_subcommand_fails() {
    anyv().arg("frobnicate").assert().failure();
}

#[test]
fn verbose_logs_to_stderr() {
    anyv()
        .args(["inspect", "-v"])
        .write_stdin("null")
        .assert()
        .success()
        .stdout("kNull\n")
        .stderr(predicate::str::contains("loaded input"));
}
