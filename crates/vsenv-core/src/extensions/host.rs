//! Access to the editor's extension manager

use crate::extensions::{ExtensionError, ExtensionResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Something that can list, install and uninstall editor extensions
pub trait ExtensionHost {
    /// Raw listing of installed extensions, one identifier per line
    fn list_extensions(&self) -> ExtensionResult<String>;

    /// Install a single extension
    fn install_extension(&self, id: &str) -> ExtensionResult<()>;

    /// Uninstall a single extension
    fn uninstall_extension(&self, id: &str) -> ExtensionResult<()>;
}

/// The editor's command-line interface (`code --list-extensions` and friends)
///
/// Arguments are passed as a vector directly to the program, never through a
/// shell.
#[derive(Debug, Clone)]
pub struct EditorCli {
    program: PathBuf,
}

impl EditorCli {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!(program = %self.program.display(), ?args, "invoking editor");
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program.display(), args.join(" "))
    }

    fn spawn_error(&self, source: std::io::Error) -> ExtensionError {
        ExtensionError::Spawn {
            program: self.program.display().to_string(),
            source,
        }
    }

    /// Run with stdout captured; stderr goes straight to the terminal
    fn capture(&self, args: &[&str]) -> ExtensionResult<Output> {
        let output = self
            .command(args)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(ExtensionError::CommandFailed {
                command: self.describe(args),
                status: output.status.to_string(),
            });
        }
        Ok(output)
    }

    /// Run with the editor's own progress output shown to the user
    fn run(&self, args: &[&str]) -> ExtensionResult<()> {
        let status = self
            .command(args)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(ExtensionError::CommandFailed {
                command: self.describe(args),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

impl ExtensionHost for EditorCli {
    fn list_extensions(&self) -> ExtensionResult<String> {
        let output = self.capture(&["--list-extensions"])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn install_extension(&self, id: &str) -> ExtensionResult<()> {
        self.run(&["--install-extension", id])
    }

    fn uninstall_extension(&self, id: &str) -> ExtensionResult<()> {
        self.run(&["--uninstall-extension", id])
    }
}
