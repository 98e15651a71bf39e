//! Extension CLI commands
//!
//! Handles: vsenv backup (extension half), comp, install, uninstall

use anyhow::{bail, Context};
use vsenv_core::extensions::display::format_diff_terminal;
use vsenv_core::extensions::reconcile::{
    capture_extensions, compare_extensions, install_missing, uninstall_extra,
};
use vsenv_core::extensions::ApplyReport;
use vsenv_core::Config;

/// Record the installed extensions
pub fn backup(config: &Config) -> anyhow::Result<()> {
    let path = config.extensions_file();
    let count = capture_extensions(&config.editor_cli(), &path)
        .context("Failed to back up extensions")?;
    println!("Saved {count} extensions to {}", path.display());
    Ok(())
}

/// Print extensions that differ between the recorded list and the editor
pub fn compare(config: &Config, json: bool) -> anyhow::Result<()> {
    let diff = compare_extensions(&config.editor_cli(), &config.extensions_file())
        .context("Failed to compare extensions")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print!("{}", format_diff_terminal(&diff));
    }
    Ok(())
}

/// Install recorded extensions missing from the editor
pub fn install(config: &Config) -> anyhow::Result<()> {
    let report = install_missing(&config.editor_cli(), &config.extensions_file())
        .context("Failed to install extensions")?;
    summarize(&report, "install", "installed")
}

/// Uninstall extensions the recorded list does not mention
pub fn uninstall(config: &Config) -> anyhow::Result<()> {
    let report = uninstall_extra(&config.editor_cli(), &config.extensions_file())
        .context("Failed to uninstall extensions")?;
    summarize(&report, "uninstall", "uninstalled")
}

fn summarize(report: &ApplyReport, verb: &str, done: &str) -> anyhow::Result<()> {
    if report.is_empty() {
        println!("Nothing to {verb}.");
        return Ok(());
    }

    println!("{} extension(s) {done}.", report.succeeded.len());

    if report.has_failures() {
        eprintln!("\nFailed to {verb}:");
        for failure in &report.failed {
            eprintln!("  {} ({})", failure.id, failure.message);
        }
        bail!("{} extension(s) failed to {verb}", report.failed.len());
    }
    Ok(())
}
