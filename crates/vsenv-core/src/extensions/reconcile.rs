//! Capture, compare and apply the recorded extension set

use crate::extensions::list::normalize_listing;
use crate::extensions::{ExtensionError, ExtensionHost, ExtensionList, ExtensionResult};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Divergence between the recorded list and the live set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionDiff {
    /// Installed in the editor but not recorded (`live \ recorded`), sorted
    pub remote_only: Vec<String>,
    /// Recorded but not installed (`recorded \ live`), sorted
    pub local_only: Vec<String>,
}

impl ExtensionDiff {
    /// Compute the set differences between a recorded list and a live listing
    #[must_use]
    pub fn between(recorded: &ExtensionList, live: &ExtensionList) -> Self {
        let recorded = recorded.to_set();
        let live = live.to_set();

        Self {
            remote_only: live
                .difference(&recorded)
                .map(|id| (*id).to_string())
                .collect(),
            local_only: recorded
                .difference(&live)
                .map(|id| (*id).to_string())
                .collect(),
        }
    }

    /// True when both sets are equal
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remote_only.is_empty() && self.local_only.is_empty()
    }
}

/// Outcome of a best-effort install or uninstall batch
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    /// Identifiers the editor processed successfully
    pub succeeded: Vec<String>,
    /// Identifiers the editor rejected
    pub failed: Vec<ApplyFailure>,
}

impl ApplyReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.failed.is_empty()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// A single failed install or uninstall
#[derive(Debug, Clone, Serialize)]
pub struct ApplyFailure {
    pub id: String,
    pub message: String,
}

/// Query the editor for the live extension set
///
/// # Errors
/// Returns an error if the editor cannot be run or fails
pub fn query_live<H: ExtensionHost + ?Sized>(host: &H) -> ExtensionResult<ExtensionList> {
    let listing = host.list_extensions()?;
    Ok(ExtensionList::parse(&listing))
}

/// Record the live extension listing into `path`, overwriting it
///
/// Returns the number of recorded identifiers.
///
/// # Errors
/// Returns an error if the editor fails or the file cannot be written
pub fn capture_extensions<H: ExtensionHost + ?Sized>(
    host: &H,
    path: &Path,
) -> ExtensionResult<usize> {
    let listing = normalize_listing(&host.list_extensions()?);
    fs::write(path, &listing).map_err(|e| ExtensionError::io(path, e))?;

    let count = ExtensionList::parse(&listing).len();
    info!(path = %path.display(), count, "recorded extensions");
    Ok(count)
}

/// Compare the recorded list at `path` against the live set
///
/// # Errors
/// Returns an error if the recorded list is missing or the editor fails
pub fn compare_extensions<H: ExtensionHost + ?Sized>(
    host: &H,
    path: &Path,
) -> ExtensionResult<ExtensionDiff> {
    let recorded = ExtensionList::read(path)?;
    let live = query_live(host)?;
    Ok(ExtensionDiff::between(&recorded, &live))
}

/// Install every recorded extension the editor does not have
///
/// # Errors
/// Returns an error if the recorded list is missing or the editor cannot be
/// run at all. Individual install failures are collected in the report.
pub fn install_missing<H: ExtensionHost + ?Sized>(
    host: &H,
    path: &Path,
) -> ExtensionResult<ApplyReport> {
    let diff = compare_extensions(host, path)?;
    apply_each(host, &diff.local_only, "install", H::install_extension)
}

/// Uninstall every live extension missing from the recorded list
///
/// # Errors
/// Returns an error if the recorded list is missing or the editor cannot be
/// run at all. Individual uninstall failures are collected in the report.
pub fn uninstall_extra<H: ExtensionHost + ?Sized>(
    host: &H,
    path: &Path,
) -> ExtensionResult<ApplyReport> {
    let diff = compare_extensions(host, path)?;
    apply_each(host, &diff.remote_only, "uninstall", H::uninstall_extension)
}

fn apply_each<H, F>(host: &H, ids: &[String], verb: &str, op: F) -> ExtensionResult<ApplyReport>
where
    H: ExtensionHost + ?Sized,
    F: Fn(&H, &str) -> ExtensionResult<()>,
{
    let mut report = ApplyReport::default();

    for id in ids {
        debug!(extension = %id, "{verb}");
        match op(host, id) {
            Ok(()) => report.succeeded.push(id.clone()),
            // Without a runnable editor every remaining call fails the same way
            Err(e @ ExtensionError::Spawn { .. }) => return Err(e),
            Err(e) => {
                warn!(extension = %id, error = %e, "{verb} failed");
                report.failed.push(ApplyFailure {
                    id: id.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "{verb} finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[&str]) -> ExtensionList {
        ExtensionList::parse(&ids.join("\n"))
    }

    #[test]
    fn test_diff_equal_sets() {
        let diff = ExtensionDiff::between(&list(&["a.a", "b.b"]), &list(&["b.b", "a.a"]));
        assert!(diff.is_empty());
    }

    #[test]
    fn test_diff_both_directions() {
        let recorded = list(&["a.a", "b.b", "c.c"]);
        let live = list(&["c.c", "d.d", "e.e"]);
        let diff = ExtensionDiff::between(&recorded, &live);

        assert_eq!(diff.remote_only, vec!["d.d", "e.e"]);
        assert_eq!(diff.local_only, vec!["a.a", "b.b"]);
    }

    #[test]
    fn test_diff_ignores_duplicates() {
        let diff = ExtensionDiff::between(&list(&["a.a", "a.a"]), &list(&["b.b", "b.b"]));
        assert_eq!(diff.remote_only, vec!["b.b"]);
        assert_eq!(diff.local_only, vec!["a.a"]);
    }

    #[test]
    fn test_diff_empty_recorded() {
        let diff = ExtensionDiff::between(&list(&[]), &list(&["a.a"]));
        assert_eq!(diff.remote_only, vec!["a.a"]);
        assert!(diff.local_only.is_empty());
    }
}
