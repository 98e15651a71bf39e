//! Platform-specific location of the live settings file

use crate::config::Platform;
use crate::settings::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

/// Resolve the editor's user `settings.json` for a platform
///
/// Linux uses `$XDG_CONFIG_HOME` (or `~/.config`), Windows uses the roaming
/// application data folder (`%APPDATA%`).
///
/// # Errors
/// Returns an error for unsupported platforms or a missing config directory
pub fn live_settings_path(platform: &Platform) -> SettingsResult<PathBuf> {
    match platform {
        Platform::Linux | Platform::Windows => {
            let config_dir = dirs::config_dir().ok_or(SettingsError::ConfigDirNotFound)?;
            Ok(settings_under(&config_dir))
        }
        Platform::Other(os) => Err(SettingsError::UnsupportedPlatform(os.clone())),
    }
}

/// Location of `settings.json` below a config directory
#[must_use]
pub fn settings_under(config_dir: &Path) -> PathBuf {
    config_dir.join("Code").join("User").join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_under() {
        let path = settings_under(Path::new("/home/user/.config"));
        assert_eq!(
            path,
            PathBuf::from("/home/user/.config/Code/User/settings.json")
        );
    }

    #[test]
    fn test_other_platform_unsupported() {
        let result = live_settings_path(&Platform::Other("macos".to_string()));
        assert!(matches!(result, Err(SettingsError::UnsupportedPlatform(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_path_ends_with_code_user() {
        if let Ok(path) = live_settings_path(&Platform::Linux) {
            assert!(path.ends_with("Code/User/settings.json"));
        }
    }
}
