//! Error types for settings operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors that can occur while syncing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing a settings file failed
    #[error("I/O error for {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No known settings location on this platform
    #[error("Unsupported platform for settings sync: {0}")]
    UnsupportedPlatform(String),

    /// The per-user config directory could not be determined
    #[error("User config directory not found")]
    ConfigDirNotFound,
}

impl SettingsError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether a settings file was missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
