//! End-to-end CLI tests for chatsift.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: parsing works via CLI
//! - **Output formats**: CSV, JSON, JSONL generation
//! - **Filters**: sender and date filtering
//! - **Flags**: report, merge, continuation flags
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with a small WhatsApp export.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let export = "[1/2/24, 09:15:00 AM] Mom: Good morning sweetheart!
[1/2/24, 09:16:03 AM] Mom: <Media omitted>
[1/2/24, 09:17:45 AM] Mom: Hi
[1/2/24, 09:18:00 AM] Mom: Call me when you can
[1/2/24, 09:20:00 AM] Sam: On my way now, traffic is bad";
    fs::write(dir.path().join("chat.txt"), export).unwrap();

    fs::write(dir.path().join("empty.txt"), "   \n\n  ").unwrap();

    fs::write(
        dir.path().join("garbage.txt"),
        "this is not\na chat export\nat all",
    )
    .unwrap();

    dir
}

fn chatsift() -> Command {
    Command::cargo_bin("chatsift").expect("binary exists")
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_basic_parse_to_csv() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("out.csv");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.contains("Sender;Content"));
    // "Good morning..." and "Call me..." merge into one Mom entry
    assert!(csv.contains("Good morning sweetheart!"));
    assert!(csv.contains("On my way now, traffic is bad"));
    assert!(!csv.contains("Media omitted"));
}

#[test]
fn test_found_message_count_reported() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("out.csv");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 messages from 2 participants"));
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_jsonl_output() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("out.jsonl");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .args(["--format", "jsonl", "--no-merge"])
        .assert()
        .success();

    let jsonl = fs::read_to_string(&output).unwrap();
    assert_eq!(jsonl.lines().count(), 3);
    for line in jsonl.lines() {
        serde_json::from_str::<serde_json::Value>(line).expect("valid JSON per line");
    }
}

#[test]
fn test_json_output_with_timestamps() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("out.json");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .args(["--format", "json", "--timestamps", "--no-merge"])
        .assert()
        .success();

    let json = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["timestamp"], "1/2/24, 09:15:00 AM");
}

// ============================================================================
// Filters and flags
// ============================================================================

#[test]
fn test_sender_filter() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("mom.jsonl");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .args(["--format", "jsonl", "--from", "Mom", "--no-merge"])
        .assert()
        .success();

    let jsonl = fs::read_to_string(&output).unwrap();
    assert_eq!(jsonl.lines().count(), 2);
    for line in jsonl.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["sender"], "Mom");
    }
}

#[test]
fn test_report_flag_prints_summary() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("out.csv");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .arg("--report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report:"))
        .stdout(predicate::str::contains("Mom, Sam"))
        .stdout(predicate::str::contains("1/2/24 - 1/2/24"));
}

#[test]
fn test_merge_enabled_by_default() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("merged.jsonl");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .args(["--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merging consecutive messages"));

    // Mom's two messages collapse into one entry
    let jsonl = fs::read_to_string(&output).unwrap();
    assert_eq!(jsonl.lines().count(), 2);
}

#[test]
fn test_date_filter_excludes_everything() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");
    let output = dir.path().join("out.csv");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .args(["--after", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 messages after filtering"));
}

#[test]
fn test_invalid_date_filter_fails() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["--after", "01-01-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_empty_file_fails_with_guidance() {
    let dir = setup_fixtures();
    let input = dir.path().join("empty.txt");

    chatsift()
        .arg(input.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("Re-export the chat"));
}

#[test]
fn test_garbage_file_fails_with_guidance() {
    let dir = setup_fixtures();
    let input = dir.path().join("garbage.txt");

    chatsift()
        .arg(input.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no messages found"))
        .stderr(predicate::str::contains("WhatsApp chat export"));
}

#[test]
fn test_missing_file_fails() {
    chatsift()
        .arg("definitely_not_a_file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_unknown_sender_fails() {
    let dir = setup_fixtures();
    let input = dir.path().join("chat.txt");

    chatsift()
        .arg(input.to_str().unwrap())
        .args(["--from", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sender name matches exactly"));
}

#[test]
fn test_help_flag() {
    chatsift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatsift"))
        .stdout(predicate::str::contains("--from"));
}
