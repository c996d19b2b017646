/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary in mock mode against a temp data
/// directory and verify command-line behavior end to end.
mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a config selecting mock mode with a near-zero simulated delay
fn fast_mock_config(dir: &Path) -> PathBuf {
    let path = dir.join("refiner.toml");
    fs::write(&path, "mode = \"mock\"\nmock_delay_ms = 5\n").unwrap();
    path
}

fn refiner(temp: &TempDir) -> Command {
    let config = fast_mock_config(temp.path());
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_refiner"));
    cmd.arg("--config").arg(config).arg("--data-dir").arg(temp.path().join("data"));
    cmd
}

fn write_media(temp: &TempDir, name: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, b"media bytes").unwrap();
    path
}

#[test]
fn test_cli_history_list_empty() {
    let temp = TempDir::new().unwrap();
    refiner(&temp)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History is empty"));
}

#[test]
fn test_cli_process_records_and_lists() {
    let temp = TempDir::new().unwrap();
    let media = write_media(&temp, "photo.jpg");

    refiner(&temp)
        .arg("process")
        .arg(&media)
        .args(["--kind", "image", "--source", "camera"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Artifact:"))
        .stdout(predicate::str::contains("Recorded as "));

    refiner(&temp)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s), newest first"))
        .stdout(predicate::str::contains("image"))
        .stdout(predicate::str::contains("camera"));
}

#[test]
fn test_cli_process_no_save_keeps_history_empty() {
    let temp = TempDir::new().unwrap();
    let media = write_media(&temp, "photo.jpg");

    refiner(&temp)
        .arg("process")
        .arg(&media)
        .arg("--no-save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Artifact:"))
        .stdout(predicate::str::contains("Recorded as ").not());

    refiner(&temp)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History is empty"));
}

#[test]
fn test_cli_process_missing_media_fails_before_flow() {
    let temp = TempDir::new().unwrap();

    refiner(&temp)
        .arg("process")
        .arg(temp.path().join("absent.jpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read media file"));

    refiner(&temp)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History is empty"));
}

#[test]
fn test_cli_history_delete_is_idempotent() {
    let temp = TempDir::new().unwrap();

    refiner(&temp)
        .args(["history", "delete", "no-such-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted no-such-id"));
}

#[test]
fn test_cli_history_clear() {
    let temp = TempDir::new().unwrap();
    let media = write_media(&temp, "photo.jpg");

    refiner(&temp).arg("process").arg(&media).assert().success();

    refiner(&temp)
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));

    refiner(&temp)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History is empty"));
}

#[test]
fn test_cli_process_video_records_video_kind() {
    let temp = TempDir::new().unwrap();
    let media = write_media(&temp, "clip.mp4");

    refiner(&temp)
        .arg("process")
        .arg(&media)
        .args(["--kind", "video", "--source", "gallery"])
        .assert()
        .success();

    refiner(&temp)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("video"))
        .stdout(predicate::str::contains("gallery"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_refiner"));
    cmd.assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_refiner"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("enhancement service"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("history"));
}
