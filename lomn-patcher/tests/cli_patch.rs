//! CLI integration tests for patch application
//!
//! These tests run the lomn-patcher binary against scratch files sized to
//! cover every catalog write.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use lomn_patch::patches::end_offset;
use lomn_patch::{catalog, find};

fn lomn_patcher() -> Command {
    Command::cargo_bin("lomn-patcher").unwrap()
}

/// Creates a zero-filled stand-in for the game executable
fn create_target(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("LEGO Bionicle.exe");
    fs::write(&path, vec![0u8; end_offset() as usize]).unwrap();
    path
}

fn is_untouched(path: &Path) -> bool {
    fs::read(path).unwrap().iter().all(|&b| b == 0)
}

#[test]
fn test_help_lists_patches() {
    let mut assert = lomn_patcher().arg("--help").assert().success();
    for patch in catalog() {
        assert = assert.stdout(predicate::str::contains(patch.name));
    }
}

#[test]
fn test_list() {
    lomn_patcher()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("screenresini"))
        .stdout(predicate::str::contains("Set the bit depth to 24"));
}

#[test]
fn test_list_long() {
    lomn_patcher()
        .args(["list", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x22CAE4"))
        .stdout(predicate::str::contains("0x0062F0E4"));
}

#[test]
fn test_apply_single_patch() {
    let dir = TempDir::new().unwrap();
    let path = create_target(&dir);

    lomn_patcher()
        .args(["apply", "-e", "screenres4"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Patching: screenres4: Set default screen resolution to 4\nDone\n");

    let offset = find("screenres4").unwrap().writes[0].offset as usize;
    let patched = fs::read(&path).unwrap();
    assert_eq!(patched[offset], 0x04);
    assert_eq!(patched.iter().filter(|&&b| b != 0).count(), 1);
}

#[test]
fn test_apply_all() {
    let dir = TempDir::new().unwrap();
    let path = create_target(&dir);

    let output = lomn_patcher().arg("apply").arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut expected: Vec<String> = catalog()
        .iter()
        .map(|p| format!("Patching: {}: {}", p.name, p.description))
        .collect();
    expected.push("Done".to_string());
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_apply_disabled() {
    let dir = TempDir::new().unwrap();
    let path = create_target(&dir);

    lomn_patcher()
        .args(["apply", "-d", "hvp", "--disabled", "win10"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Patching: hvp").not())
        .stdout(predicate::str::contains("Patching: win10").not())
        .stdout(predicate::str::contains("Patching: bitdepth24"));

    let hvp = find("hvp").unwrap().writes[0].offset as usize;
    assert_eq!(fs::read(&path).unwrap()[hvp], 0);
}

#[test]
fn test_enabled_and_disabled_conflict() {
    let dir = TempDir::new().unwrap();
    let path = create_target(&dir);

    lomn_patcher()
        .args(["apply", "-e", "hvp", "-d", "win10"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(is_untouched(&path));
}

#[test]
fn test_unknown_name_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = create_target(&dir);

    lomn_patcher()
        .args(["apply", "-e", "win7", "-e", "bitdepth24"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Patching: bitdepth24: Set the bit depth to 24\nDone\n")
        .stderr(predicate::str::contains("win7"));
}

#[test]
fn test_unknown_name_strict() {
    let dir = TempDir::new().unwrap();
    let path = create_target(&dir);

    lomn_patcher()
        .args(["apply", "--strict", "-e", "win7", "-e", "bitdepth24"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown patch name(s): win7"));

    assert!(is_untouched(&path));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.exe");

    lomn_patcher()
        .arg("apply")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Done").not())
        .stderr(predicate::str::contains("Failed to patch"));

    assert!(!path.exists());
}

#[test]
fn test_completions() {
    lomn_patcher()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lomn-patcher"));
}
