//! Settings file synchronization
//!
//! Copies the editor's user `settings.json` to and from a recorded copy in
//! the working directory, and diffs the two as plain text.

pub mod diff;
pub mod error;
pub mod path;
pub mod sync;

pub use diff::unified_diff;
pub use error::{SettingsError, SettingsResult};
pub use sync::{capture_settings, diff_settings, restore_settings, restore_settings_at};

/// Recorded settings copy, relative to the working directory
pub const SETTINGS_BACKUP_FILE: &str = "vscode-settings.jsonc";

/// File name of the snapshot taken before a restore at `timestamp` (Unix seconds)
#[must_use]
pub fn snapshot_file_name(timestamp: i64) -> String {
    format!("vscode-settings-{timestamp}.jsonc")
}
