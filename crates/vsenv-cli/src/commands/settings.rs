//! Settings CLI commands
//!
//! Handles: vsenv backup (settings half), diff, restore

use anyhow::Context;
use vsenv_core::settings::{capture_settings, diff_settings, restore_settings};
use vsenv_core::Config;

/// Copy the live settings file into the working directory
pub fn backup(config: &Config) -> anyhow::Result<()> {
    let live = config.live_settings_file()?;
    let backup = config.settings_backup_file();
    capture_settings(&live, &backup).context("Failed to back up settings")?;
    println!("Saved settings to {}", backup.display());
    Ok(())
}

/// Print a unified diff from the recorded copy to the live file
pub fn diff(config: &Config) -> anyhow::Result<()> {
    let live = config.live_settings_file()?;
    let diff = diff_settings(&config.settings_backup_file(), &live)
        .context("Failed to diff settings")?;
    print!("{diff}");
    Ok(())
}

/// Snapshot the live file, then overwrite it with the recorded copy
pub fn restore(config: &Config) -> anyhow::Result<()> {
    let live = config.live_settings_file()?;
    let backup = config.settings_backup_file();
    let snapshot = restore_settings(&live, &backup, &config.work_dir)
        .context("Failed to restore settings")?;
    println!("Saved current settings to {}", snapshot.display());
    println!("Restored {} to {}", backup.display(), live.display());
    Ok(())
}
