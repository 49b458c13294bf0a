//! End-to-end CLI tests for whatstats.
//!
//! These run the actual binary against scratch export files.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
1/2/23, 10:05 AM - Alice: Hello there! 😀
1/2/23, 10:07 AM - Alice: <Media omitted>
1/3/23, 9:15 PM - Bob: that was a great movie
1/4/23, 8:01 AM - Bob: sorry, was asleep";

fn write_sample(dir: &tempfile::TempDir) -> String {
    let path = dir.path().join("chat.txt");
    fs::write(&path, SAMPLE).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_text_report() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("whatstats")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ALICE"))
        .stdout(predicate::str::contains("BOB"))
        .stdout(predicate::str::contains("CHAT STATISTICS"))
        .stdout(predicate::str::contains("Messages sent:   4"));
}

#[test]
fn test_single_sender_report() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("whatstats")
        .unwrap()
        .args([path.as_str(), "--sender", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALICE"))
        .stdout(predicate::str::contains("Messages sent:   2"))
        .stdout(predicate::str::contains("hello (1)"))
        .stdout(predicate::str::contains("BOB").not());
}

#[test]
fn test_json_report() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("whatstats")
        .unwrap()
        .args([path.as_str(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_messages\": 4"))
        .stdout(predicate::str::contains("\"sender\": \"Alice\""));
}

#[test]
fn test_unknown_sender_fails() {
    let dir = tempdir().unwrap();
    let path = write_sample(&dir);

    Command::cargo_bin("whatstats")
        .unwrap()
        .args([path.as_str(), "--sender", "Carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Carol"));
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("whatstats")
        .unwrap()
        .arg("definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_ambiguous_export_suggests_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("oneday.txt");
    fs::write(&path, "1/2/23, 10:05 AM - Alice: Hello\n").unwrap();

    Command::cargo_bin("whatstats")
        .unwrap()
        .arg(path.to_string_lossy().as_ref())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ambiguous date order"));

    // forcing an order makes the same file parse
    Command::cargo_bin("whatstats")
        .unwrap()
        .args([
            path.to_string_lossy().as_ref(),
            "--date-order",
            "month-first",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALICE"));
}
