//! Recorded extension list parsing and writing

use crate::extensions::{ExtensionError, ExtensionResult};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// An ordered list of extension identifiers
///
/// Identifiers are opaque `publisher.name` strings compared by exact,
/// case-sensitive equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList {
    ids: Vec<String>,
}

impl ExtensionList {
    /// Parse a newline-separated listing, trimming each line and skipping blanks
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let ids = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    /// Read a recorded list from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read (including not found)
    pub fn read(path: &Path) -> ExtensionResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ExtensionError::io(path, e))?;
        let list = Self::parse(&content);
        debug!(path = %path.display(), count = list.len(), "read recorded extensions");
        Ok(list)
    }

    /// Identifiers in recorded order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Identifiers as a set (duplicates and order dropped)
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<&str> {
        self.ids.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Normalize raw editor output for the recorded file: LF line endings, and a
/// trailing newline when there is any content.
#[must_use]
pub fn normalize_listing(raw: &str) -> String {
    let mut text = raw.replace("\r\n", "\n");
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
