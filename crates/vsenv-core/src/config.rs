//! Runtime configuration resolved once at startup

use crate::extensions::{EditorCli, EXTENSIONS_FILE};
use crate::settings::path::live_settings_path;
use crate::settings::{snapshot_file_name, SettingsResult, SETTINGS_BACKUP_FILE};
use std::fmt;
use std::path::PathBuf;

/// Operating system family, detected once and passed to every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    /// Any other OS; settings sync is unsupported there
    Other(String),
}

impl Platform {
    /// Detect the platform this binary was built for
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` value to a platform family
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }

    /// Editor launcher name when none is configured.
    ///
    /// On Windows `code` is a batch file, and without a shell it has to be
    /// named with its extension.
    #[must_use]
    pub fn default_editor(&self) -> &'static str {
        match self {
            Self::Windows => "code.cmd",
            Self::Linux | Self::Other(_) => "code",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
            Self::Other(os) => write!(f, "{os}"),
        }
    }
}

/// Everything an operation needs to know about its environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Detected platform
    pub platform: Platform,
    /// Editor program used for extension management
    pub editor: PathBuf,
    /// Directory holding the recorded files and restore snapshots
    pub work_dir: PathBuf,
    /// Explicit live settings path, bypassing platform resolution
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Create a configuration with defaults for the given platform
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            editor: PathBuf::from(platform.default_editor()),
            platform,
            work_dir: PathBuf::from("."),
            settings_path: None,
        }
    }

    /// Use a different editor program
    #[must_use]
    pub fn with_editor(mut self, editor: PathBuf) -> Self {
        self.editor = editor;
        self
    }

    /// Keep recorded files in a different directory
    #[must_use]
    pub fn with_work_dir(mut self, work_dir: PathBuf) -> Self {
        self.work_dir = work_dir;
        self
    }

    /// Point at an explicit live settings file
    #[must_use]
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    /// Editor CLI handle for extension operations
    #[must_use]
    pub fn editor_cli(&self) -> EditorCli {
        EditorCli::new(self.editor.clone())
    }

    /// Path of the recorded extension list
    #[must_use]
    pub fn extensions_file(&self) -> PathBuf {
        self.work_dir.join(EXTENSIONS_FILE)
    }

    /// Path of the recorded settings copy
    #[must_use]
    pub fn settings_backup_file(&self) -> PathBuf {
        self.work_dir.join(SETTINGS_BACKUP_FILE)
    }

    /// Path of a pre-restore snapshot taken at `timestamp` (Unix seconds)
    #[must_use]
    pub fn snapshot_file(&self, timestamp: i64) -> PathBuf {
        self.work_dir.join(snapshot_file_name(timestamp))
    }

    /// Resolve the live settings file
    ///
    /// # Errors
    /// Returns an error if the platform is unsupported or has no config dir
    pub fn live_settings_file(&self) -> SettingsResult<PathBuf> {
        match &self.settings_path {
            Some(path) => Ok(path.clone()),
            None => live_settings_path(&self.platform),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}
