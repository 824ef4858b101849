//! End-to-end tests for the chatlens binary.
//!
//! These run the compiled binary against real temp files, so they require
//! the default feature set (`cli` + `json-output`).

#![cfg(feature = "cli")]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SAMPLE: &str = "\
1/2/2024, 9:05 am - Alice: pizza tonight? 😀
1/2/2024, 9:06 am - Bob: pizza sounds good https://menu.example.com
2/2/2024, 7:30 pm - Alice: <Media omitted>
";

fn write_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn text_report_shows_sections() {
    let file = write_export(SAMPLE);

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Overview"))
        .stdout(predicate::str::contains("Busiest participants"))
        .stdout(predicate::str::contains("Most common words"))
        .stdout(predicate::str::contains("pizza"))
        .stdout(predicate::str::contains("https://menu.example.com"))
        .stdout(predicate::str::contains("Daily timeline"));
}

#[test]
fn author_filter_hides_participant_ranking() {
    let file = write_export(SAMPLE);

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--author", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Busiest participants").not())
        .stdout(predicate::str::contains("Overview"));
}

#[test]
fn unparseable_file_shows_no_data_notice() {
    let file = write_export("just some notes\nnothing resembling an export\n");

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages could be parsed"));
}

#[test]
fn unmatched_filter_shows_no_match_notice() {
    let file = write_export(SAMPLE);

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--author", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages match"));
}

#[test]
fn missing_file_fails_with_error() {
    Command::cargo_bin("chatlens")
        .unwrap()
        .arg("does_not_exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_filter_date_fails() {
    let file = write_export(SAMPLE);

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--after", "01-01-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[cfg(feature = "json-output")]
#[test]
fn json_report_is_valid_json() {
    let file = write_export(SAMPLE);

    let output = Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["overview"]["messages"], 3);
    assert_eq!(report["busiest_authors"][0]["author"], "Alice");
}

#[test]
fn top_words_flag_limits_section() {
    let file = write_export(SAMPLE);

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--top-words", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pizza"));
}
