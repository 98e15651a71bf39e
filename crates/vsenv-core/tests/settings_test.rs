//! Settings sync tests
//!
//! Capture, diff and restore against a temporary live settings file.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use vsenv_core::settings::{
    capture_settings, diff_settings, restore_settings, restore_settings_at, snapshot_file_name,
};
use vsenv_core::{Config, Platform};

const SETTINGS: &str = "{\n  // Editor\n  \"editor.fontSize\": 14,\n  \"editor.tabSize\": 4,\n  \"files.autoSave\": \"afterDelay\"\n}\n";

/// Working directory plus a separate live settings file
struct Env {
    _temp: TempDir,
    config: Config,
    live: PathBuf,
}

fn setup(live_content: &str) -> Env {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let work_dir = temp.path().join("work");
    let user_dir = temp.path().join("Code/User");
    fs::create_dir_all(&work_dir).expect("Failed to create work dir");
    fs::create_dir_all(&user_dir).expect("Failed to create user dir");

    let live = user_dir.join("settings.json");
    fs::write(&live, live_content).expect("Failed to write live settings");

    let config = Config::new(Platform::Linux)
        .with_work_dir(work_dir)
        .with_settings_path(live.clone());

    Env {
        _temp: temp,
        config,
        live,
    }
}

#[test]
fn test_capture_then_diff_is_empty() {
    let env = setup(SETTINGS);
    let backup = env.config.settings_backup_file();

    capture_settings(&env.live, &backup).expect("Failed to capture");
    let diff = diff_settings(&backup, &env.live).expect("Failed to diff");

    assert_eq!(diff, "");
}

#[test]
fn test_capture_crlf_then_diff_is_empty() {
    let env = setup(&SETTINGS.replace('\n', "\r\n"));
    let backup = env.config.settings_backup_file();

    capture_settings(&env.live, &backup).unwrap();

    assert!(!fs::read_to_string(&backup).unwrap().contains('\r'));
    assert_eq!(diff_settings(&backup, &env.live).unwrap(), "");
}

#[test]
fn test_capture_is_idempotent() {
    let env = setup(SETTINGS);
    let backup = env.config.settings_backup_file();

    capture_settings(&env.live, &backup).unwrap();
    let first = fs::read(&backup).unwrap();
    capture_settings(&env.live, &backup).unwrap();

    assert_eq!(first, fs::read(&backup).unwrap());
}

#[test]
fn test_diff_shows_live_changes() {
    let env = setup(SETTINGS);
    let backup = env.config.settings_backup_file();
    capture_settings(&env.live, &backup).unwrap();

    fs::write(&env.live, SETTINGS.replace("14", "16")).unwrap();
    let diff = diff_settings(&backup, &env.live).unwrap();

    assert!(diff.starts_with("--- before.json\n+++ after.json\n"));
    assert!(diff.contains("-  \"editor.fontSize\": 14,\n"));
    assert!(diff.contains("+  \"editor.fontSize\": 16,\n"));
}

#[test]
fn test_diff_missing_backup() {
    let env = setup(SETTINGS);
    let err = diff_settings(&env.config.settings_backup_file(), &env.live).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_restore_snapshots_then_overwrites() {
    let env = setup("A");
    let backup = env.config.settings_backup_file();
    fs::write(&backup, "B").unwrap();

    let snapshot = restore_settings_at(&env.live, &backup, &env.config.work_dir, 1_700_000_000)
        .expect("Failed to restore");

    assert_eq!(snapshot, env.config.snapshot_file(1_700_000_000));
    assert_eq!(fs::read_to_string(&snapshot).unwrap(), "A");
    assert_eq!(fs::read_to_string(&env.live).unwrap(), "B");
}

#[test]
fn test_restore_snapshot_keeps_exact_bytes() {
    let original = "{\r\n  \"a\": 1\r\n}";
    let env = setup(original);
    let backup = env.config.settings_backup_file();
    fs::write(&backup, "{}\n").unwrap();

    let snapshot = restore_settings_at(&env.live, &backup, &env.config.work_dir, 7).unwrap();

    assert_eq!(fs::read(&snapshot).unwrap(), original.as_bytes());
}

#[test]
fn test_restore_missing_backup_keeps_snapshot_and_live() {
    let env = setup("A");
    let backup = env.config.settings_backup_file();

    let err = restore_settings_at(&env.live, &backup, &env.config.work_dir, 99).unwrap_err();

    assert!(err.is_not_found());
    let snapshot = env.config.work_dir.join(snapshot_file_name(99));
    assert_eq!(fs::read_to_string(snapshot).unwrap(), "A");
    assert_eq!(fs::read_to_string(&env.live).unwrap(), "A");
}

#[test]
fn test_restore_same_second_overwrites_snapshot() {
    let env = setup("first");
    let backup = env.config.settings_backup_file();
    fs::write(&backup, "second").unwrap();

    restore_settings_at(&env.live, &backup, &env.config.work_dir, 5).unwrap();
    let snapshot = restore_settings_at(&env.live, &backup, &env.config.work_dir, 5).unwrap();

    assert_eq!(fs::read_to_string(snapshot).unwrap(), "second");
}

#[test]
fn test_restore_uses_current_time() {
    let env = setup("A");
    let backup = env.config.settings_backup_file();
    fs::write(&backup, "B").unwrap();

    let before = chrono::Utc::now().timestamp();
    let snapshot = restore_settings(&env.live, &backup, &env.config.work_dir).unwrap();
    let after = chrono::Utc::now().timestamp();

    let name = snapshot.file_name().unwrap().to_string_lossy().to_string();
    let stamp: i64 = name
        .trim_start_matches("vscode-settings-")
        .trim_end_matches(".jsonc")
        .parse()
        .expect("Snapshot name should carry a timestamp");
    assert!((before..=after).contains(&stamp));
}
