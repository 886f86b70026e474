//! End-to-end integration tests for the extraction pipeline.
//!
//! Tests the complete pipeline from .gmd document to decoded output
//! file, through both the library API and the compiled binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use gmd_extract::{extract_to_file, extract_to_string, payload, ExtractError, Level};

/// Write a .gmd document with the given raw payload text under key k4,
/// surrounded by unrelated key/value pairs.
fn write_gmd(dir: &Path, raw_payload: &str) -> PathBuf {
    let xml = format!(
        "<plist>\
            <k>k1</k><i>35</i>\
            <k>k2</k><s>Stereo Madness</s>\
            <k>k4</k><s>{raw_payload}</s>\
            <k>k5</k><s>RobTop</s>\
        </plist>"
    );
    let path = dir.join("level.gmd");
    fs::write(&path, xml).unwrap();
    path
}

#[test]
fn test_end_to_end_hello_world() {
    let dir = tempdir().unwrap();
    let input = write_gmd(dir.path(), &payload::encode("hello world"));
    let output = dir.path().join("out.txt");

    extract_to_file(&input, &output, "k4").unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello world");
}

#[test]
fn test_extraction_is_independent_of_other_pairs() {
    // Only the sibling following the k4 marker matters
    let dir = tempdir().unwrap();
    let input = write_gmd(dir.path(), &payload::encode("the payload"));

    assert_eq!(extract_to_string(&input, "k4").unwrap(), "the payload");
}

#[test]
fn test_missing_key_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("level.gmd");
    fs::write(&input, "<plist><k>k1</k><i>35</i></plist>").unwrap();
    let output = dir.path().join("out.txt");

    let err = extract_to_file(&input, &output, "k4").unwrap_err();
    assert!(matches!(err, ExtractError::KeyNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn test_marker_as_last_element_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("level.gmd");
    fs::write(&input, "<plist><k>k1</k><i>35</i><k>k4</k></plist>").unwrap();

    let err = extract_to_string(&input, "k4").unwrap_err();
    assert!(matches!(err, ExtractError::KeyNotFound { .. }));
}

#[test]
fn test_invalid_base64_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = write_gmd(dir.path(), "!!!not-base64!!!");
    let output = dir.path().join("out.txt");

    let err = extract_to_file(&input, &output, "k4").unwrap_err();
    assert!(matches!(err, ExtractError::Base64(_)));
    assert!(!output.exists());
}

#[test]
fn test_valid_base64_invalid_gzip_fails_without_output() {
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;

    let dir = tempdir().unwrap();
    let input = write_gmd(dir.path(), &URL_SAFE.encode(b"these bytes are not gzip"));
    let output = dir.path().join("out.txt");

    let err = extract_to_file(&input, &output, "k4").unwrap_err();
    assert!(matches!(err, ExtractError::Decompress { .. }));
    assert!(!output.exists());
}

#[test]
fn test_custom_key_lookup() {
    let dir = tempdir().unwrap();
    let xml = format!(
        "<plist><k>k4</k><s>{}</s><k>k9</k><s>{}</s></plist>",
        payload::encode("under k4"),
        payload::encode("under k9"),
    );
    let input = dir.path().join("level.gmd");
    fs::write(&input, xml).unwrap();

    assert_eq!(extract_to_string(&input, "k9").unwrap(), "under k9");
}

#[test]
fn test_decoded_level_string_parses() {
    let dir = tempdir().unwrap();
    let level_string = "kA2,0,kA4,3;1,1,2,15,3,15;1,8,2,165,3,15;";
    let input = write_gmd(dir.path(), &payload::encode(level_string));

    let text = extract_to_string(&input, "k4").unwrap();
    let level = Level::parse(&text);

    assert_eq!(level.header_value("kA4"), Some("3"));
    assert_eq!(level.objects.len(), 2);
    assert_eq!(level.objects[1].x, 165.0);
}

#[test]
fn test_cli_extract_success() {
    let dir = tempdir().unwrap();
    let input = write_gmd(dir.path(), &payload::encode("hello world"));
    let output = dir.path().join("out.txt");

    Command::cargo_bin("gmd-extract")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello world");
}

#[test]
fn test_cli_extract_missing_arguments() {
    Command::cargo_bin("gmd-extract")
        .unwrap()
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_extract_missing_input_file() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("gmd-extract")
        .unwrap()
        .arg("extract")
        .arg(dir.path().join("absent.gmd"))
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_cli_extract_names_failing_stage() {
    let dir = tempdir().unwrap();
    let input = write_gmd(dir.path(), "!!!not-base64!!!");

    Command::cargo_bin("gmd-extract")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Base64 decoding failed"));
}

#[test]
fn test_cli_inspect() {
    let dir = tempdir().unwrap();
    let input = write_gmd(
        dir.path(),
        &payload::encode("kA2,0;1,1,2,15,3,15;1,8,2,45,3,15;"),
    );

    Command::cargo_bin("gmd-extract")
        .unwrap()
        .arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Objects: 2"));
}
