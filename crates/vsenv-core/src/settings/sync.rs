//! Capture, diff and restore of the live settings file

use crate::settings::diff::{normalize_line_endings, unified_diff};
use crate::settings::{snapshot_file_name, SettingsError, SettingsResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn read_text(path: &Path) -> SettingsResult<String> {
    fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))
}

fn read_bytes(path: &Path) -> SettingsResult<Vec<u8>> {
    fs::read(path).map_err(|e| SettingsError::io(path, e))
}

/// Write and flush to disk before returning
fn write_durable(path: &Path, content: &[u8]) -> SettingsResult<()> {
    let mut file = File::create(path).map_err(|e| SettingsError::io(path, e))?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| SettingsError::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Copy the live settings file to the recorded copy, normalizing to LF
///
/// # Errors
/// Returns an error if the live file cannot be read or the copy written
pub fn capture_settings(live: &Path, backup: &Path) -> SettingsResult<()> {
    let content = read_text(live)?;
    write_durable(backup, normalize_line_endings(&content).as_bytes())?;
    info!(from = %live.display(), to = %backup.display(), "recorded settings");
    Ok(())
}

/// Unified diff from the recorded copy to the live file
///
/// Returns an empty string when the two match.
///
/// # Errors
/// Returns an error if either file cannot be read
pub fn diff_settings(backup: &Path, live: &Path) -> SettingsResult<String> {
    let before = read_text(backup)?;
    let after = read_text(live)?;
    Ok(unified_diff(&before, &after))
}

/// Restore the recorded copy over the live file, snapshotting first
///
/// The snapshot is named after the current Unix time in seconds. See
/// [`restore_settings_at`].
///
/// # Errors
/// Returns an error if any file cannot be read or written
pub fn restore_settings(live: &Path, backup: &Path, snapshot_dir: &Path) -> SettingsResult<PathBuf> {
    let timestamp = chrono::Utc::now().timestamp();
    restore_settings_at(live, backup, snapshot_dir, timestamp)
}

/// Restore the recorded copy over the live file with an explicit timestamp
///
/// The live file's exact bytes are written to
/// `vscode-settings-<timestamp>.jsonc` in `snapshot_dir` and synced to disk
/// before the live file is touched. A second restore within the same second
/// overwrites that snapshot. Returns the snapshot path.
///
/// # Errors
/// Returns an error if any file cannot be read or written. If the snapshot
/// cannot be written the live file is left untouched.
pub fn restore_settings_at(
    live: &Path,
    backup: &Path,
    snapshot_dir: &Path,
    timestamp: i64,
) -> SettingsResult<PathBuf> {
    let snapshot = snapshot_dir.join(snapshot_file_name(timestamp));

    let current = read_bytes(live)?;
    write_durable(&snapshot, &current)?;
    info!(snapshot = %snapshot.display(), "saved pre-restore snapshot");

    let recorded = read_bytes(backup)?;
    write_durable(live, &recorded)?;
    info!(from = %backup.display(), to = %live.display(), "restored settings");

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_capture_normalizes_crlf() {
        let temp = TempDir::new().unwrap();
        let live = temp.path().join("settings.json");
        let backup = temp.path().join("vscode-settings.jsonc");
        fs::write(&live, "{\r\n  \"a\": 1\r\n}\r\n").unwrap();

        capture_settings(&live, &backup).unwrap();

        assert_eq!(fs::read_to_string(&backup).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_capture_missing_live_file() {
        let temp = TempDir::new().unwrap();
        let err = capture_settings(
            &temp.path().join("missing.json"),
            &temp.path().join("vscode-settings.jsonc"),
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert!(!temp.path().join("vscode-settings.jsonc").exists());
    }

    #[test]
    fn test_restore_missing_live_leaves_no_snapshot() {
        let temp = TempDir::new().unwrap();
        let backup = temp.path().join("vscode-settings.jsonc");
        fs::write(&backup, "B").unwrap();

        let result = restore_settings_at(&temp.path().join("missing.json"), &backup, temp.path(), 42);

        assert!(result.unwrap_err().is_not_found());
        assert!(!temp.path().join("vscode-settings-42.jsonc").exists());
    }
}
