//! Integration tests for the zak64 CLI

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER_LEN: usize = 1912;
const OBJECT_COUNT: usize = 775;

/// Writes a side A/side B pair with room 20 on side A and room 24 on side B.
fn write_images(dir: &Path, side_a_signature: [u8; 2]) -> (PathBuf, PathBuf) {
    let mut side_a = side_a_signature.to_vec();
    side_a.extend((0..HEADER_LEN).map(|i| (i % 97) as u8));
    let disks = 2 + OBJECT_COUNT;
    side_a[disks..disks + 59].fill(0);

    // room 20: side A, track 3 sector 2
    side_a[disks + 20] = b'1';
    side_a[disks + 59 + 40] = 2;
    side_a[disks + 59 + 41] = 3;
    // room 24: side B, track 18 sector 1
    side_a[disks + 24] = b'2';
    side_a[disks + 59 + 48] = 1;
    side_a[disks + 59 + 49] = 18;

    let room20 = (42 + 2) * 256;
    side_a.resize(room20, 0);
    side_a.extend([0x05, 0x00, 0x10, 0x20, 0x30]);

    let mut side_b = vec![0x32, 0x01];
    let room24 = (357 + 1) * 256;
    side_b.resize(room24, 0);
    side_b.extend([0xFF, 0xFF, 0x03, 0x00, 0x44]);

    let path_a = dir.join("disk2a.d64");
    let path_b = dir.join("disk2b.d64");
    fs::write(&path_a, side_a).unwrap();
    fs::write(&path_b, side_b).unwrap();
    (path_a, path_b)
}

fn zak64() -> Command {
    Command::cargo_bin("zak64").unwrap()
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_command() {
    zak64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("lfl-extract"))
        .stdout(predicate::str::contains("rooms"));
}

#[test]
fn test_extract_help_mentions_xor() {
    zak64()
        .args(["lfl-extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DISK2_A_PATH"))
        .stdout(predicate::str::contains("DISK2_B_PATH"))
        .stdout(predicate::str::contains("--xor"));
}

#[test]
fn test_extract_writes_rooms_to_working_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let (a, b) = write_images(input.path(), [0x31, 0x0A]);

    zak64()
        .current_dir(output.path())
        .arg("lfl-extract")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 3 files"))
        .stderr(predicate::str::contains("Creating 20.LFL..."));

    assert_eq!(file_names(output.path()), ["00.LFL", "20.LFL", "24.LFL"]);
    let directory = fs::read(output.path().join("00.LFL")).unwrap();
    assert_eq!(directory.len(), 2 + HEADER_LEN);
    assert_eq!(&directory[..2], &[0x32, 0x01]);
    assert_eq!(
        fs::read(output.path().join("20.LFL")).unwrap(),
        vec![0x05, 0x00, 0x10, 0x20, 0x30]
    );
    assert_eq!(
        fs::read(output.path().join("24.LFL")).unwrap(),
        vec![0xFF, 0xFF, 0x03, 0x00, 0x44]
    );
}

#[test]
fn test_extract_with_xor() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let (a, b) = write_images(input.path(), [0x31, 0x0A]);

    zak64()
        .current_dir(output.path())
        .args(["lfl-extract", "--xor"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("XORed with 0xFF"));

    assert_eq!(
        fs::read(output.path().join("20.LFL")).unwrap(),
        vec![0xFA, 0xFF, 0xEF, 0xDF, 0xCF]
    );
    let directory = fs::read(output.path().join("00.LFL")).unwrap();
    assert_eq!(&directory[..2], &[0xCD, 0xFE]);
}

#[test]
fn test_signature_mismatch_exits_2_and_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let (a, b) = write_images(input.path(), [0x33, 0x00]);

    zak64()
        .current_dir(output.path())
        .arg("lfl-extract")
        .arg(&a)
        .arg(&b)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("side A"))
        .stderr(predicate::str::contains("3300"));

    assert!(file_names(output.path()).is_empty());
}

#[test]
fn test_missing_image_exits_1() {
    let output = TempDir::new().unwrap();

    let assert = zak64()
        .current_dir(output.path())
        .args(["lfl-extract", "nope_a.d64", "nope_b.d64"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: I/O error on nope_a.d64: "));

    // The OS error is reported once, through the source chain.
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
    assert!(file_names(output.path()).is_empty());
}

#[test]
fn test_rooms_lists_without_writing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let (a, b) = write_images(input.path(), [0x31, 0x0A]);

    zak64()
        .current_dir(output.path())
        .arg("rooms")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rooms in use"))
        .stdout(predicate::str::is_match(r"(?m)^20\s+A\s+3\s+2\s").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^24\s+B\s+18\s+1\s").unwrap());

    assert!(file_names(output.path()).is_empty());
}

#[test]
fn test_invalid_command() {
    zak64()
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
