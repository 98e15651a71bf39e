//! Error types for extension operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for extension operations
pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Errors that can occur while reconciling extensions
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// Reading or writing the recorded list failed
    #[error("I/O error for {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The editor program could not be started
    #[error("Failed to run editor `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor ran but reported failure
    #[error("`{command}` failed: {status}")]
    CommandFailed { command: String, status: String },
}

impl ExtensionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a missing recorded list
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
