//! Integration tests for the logcopy binary.
//!
//! These tests verify startup validation and one live poll cycle:
//! - a missing or non-directory destination exits 1 with a localized error
//! - bad arguments exit 2 with a localized usage line
//! - a valid tree is copied on the first cycle
//! - no-op cycles are logged only in debug mode

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

/// Get a Command for the logcopy binary with a fixed Japanese locale.
fn logcopy() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logcopy");
    cmd.env_remove("LOGCOPY_LANG")
        .env_remove("LOGCOPY_DEBUG_LOG")
        .env_remove("RUST_LOG");
    cmd
}

// === Startup Validation Tests ===

#[test]
fn test_missing_destination_exits_with_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("no-such-dir");

    logcopy()
        .arg(root.path())
        .arg(&missing)
        .arg("latest.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("logcopy: エラー: 出力対象パスが存在しません:"))
        .stdout(predicate::str::contains("監視を開始します").not());
}

#[test]
fn test_file_destination_exits_with_error() {
    let root = TempDir::new().unwrap();
    let file = root.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    logcopy()
        .arg(root.path())
        .arg(&file)
        .arg("latest.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("出力対象パスがフォルダではありません:"));
}

#[test]
fn test_english_locale_from_env() {
    let root = TempDir::new().unwrap();

    logcopy()
        .env("LOGCOPY_LANG", "en")
        .arg(root.path())
        .arg(root.path().join("gone"))
        .arg("latest.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("logcopy: error: Destination path does not exist:"));
}

// === Argument Tests ===

#[test]
fn test_missing_arguments_are_localized() {
    logcopy()
        .arg("/data")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("使い方:"))
        .stderr(predicate::str::contains("以下の引数が必要です:"));
}

#[test]
fn test_help_is_localized() {
    logcopy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("指定位置引数（必須）:"))
        .stdout(predicate::str::contains("このヘルプ画面を出して終了します"));
}

// === Watch Loop Tests ===

#[test]
fn test_first_cycle_copies_latest_file() {
    let root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let dir = root.path().join("19-05-01").join("12_30_00");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("190501-123000"), "1,2,3\n").unwrap();

    // The loop never exits on its own; the timeout kills it.
    logcopy()
        .arg(root.path())
        .arg(dest.path())
        .arg("latest.csv")
        .args(["--interval", "1"])
        .timeout(Duration::from_secs(3))
        .assert()
        .stdout(predicate::str::contains("監視を開始します"))
        .stdout(predicate::str::contains("新しいデータを発見しました"));

    assert_eq!(
        fs::read_to_string(dest.path().join("latest.csv")).unwrap(),
        "1,2,3\n"
    );
}

// === Logging Tests ===

#[test]
fn test_debug_logs_no_op_cycle() {
    let root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    logcopy()
        .arg(root.path())
        .arg(dest.path())
        .arg("latest.csv")
        .args(["--debug", "-i", "1"])
        .timeout(Duration::from_secs(2))
        .assert()
        .stderr(predicate::str::contains("新しいデータは見つかりませんでした"));
}

#[test]
fn test_debug_env_logs_no_op_cycle() {
    let root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    logcopy()
        .env("LOGCOPY_DEBUG_LOG", "1")
        .arg(root.path())
        .arg(dest.path())
        .arg("latest.csv")
        .args(["-i", "1"])
        .timeout(Duration::from_secs(2))
        .assert()
        .stderr(predicate::str::contains("新しいデータは見つかりませんでした"));
}

#[test]
fn test_no_op_cycle_is_quiet_without_debug() {
    let root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    logcopy()
        .arg(root.path())
        .arg(dest.path())
        .arg("latest.csv")
        .args(["-i", "1"])
        .timeout(Duration::from_secs(2))
        .assert()
        .stderr(predicate::str::contains("新しいデータは見つかりませんでした").not());
}

#[test]
fn test_copy_is_logged_at_default_level() {
    let root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let dir = root.path().join("19-05-01").join("12_30_00");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("190501-123000"), "x").unwrap();

    logcopy()
        .arg(root.path())
        .arg(dest.path())
        .arg("latest.csv")
        .args(["-i", "1"])
        .timeout(Duration::from_secs(2))
        .assert()
        .stderr(predicate::str::contains("Copied newer entry"));
}
