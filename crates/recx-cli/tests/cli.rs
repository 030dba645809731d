//! Integration tests for the recx binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const GAS_RECEIPT: &str = "SHELL GAS STATION\n\
                           123 MAIN ST\n\
                           05/12/2024  14:32\n\
                           GAS  $45.67\n\
                           TAX  $3.20\n\
                           TOTAL $48.87\n";

fn recx() -> Command {
    Command::cargo_bin("recx").unwrap()
}

#[test]
fn extract_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, GAS_RECEIPT).unwrap();

    recx()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("SHELL GAS STATION"))
        .stdout(predicate::str::contains("48.87"))
        .stdout(predicate::str::contains("2024-05-12"))
        .stdout(predicate::str::contains("USD"));
}

#[test]
fn extract_reads_stdin() {
    recx()
        .arg("extract")
        .arg("-")
        .write_stdin("TOTAL $9.99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.99"));
}

#[test]
fn extract_text_format_marks_missing_fields() {
    recx()
        .arg("extract")
        .arg("-")
        .arg("--format")
        .arg("text")
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:   -"));
}

#[test]
fn extract_missing_file_fails() {
    recx()
        .arg("extract")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), GAS_RECEIPT).unwrap();
    fs::write(dir.path().join("b.txt"), "CORNER SHOP\nTOTAL £4.50\n").unwrap();
    let out_dir = dir.path().join("out");

    recx()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success();

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("SHELL GAS STATION"));
    assert!(summary.contains("GBP"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = tempfile::tempdir().unwrap();

    recx()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}
