//! Extension set reconciliation
//!
//! Compares the recorded extension list against the set the editor reports
//! as installed, and drives install/uninstall through the editor CLI.

pub mod display;
pub mod error;
pub mod host;
pub mod list;
pub mod reconcile;

pub use error::{ExtensionError, ExtensionResult};
pub use host::{EditorCli, ExtensionHost};
pub use list::ExtensionList;
pub use reconcile::{ApplyFailure, ApplyReport, ExtensionDiff};

/// Recorded extension list, relative to the working directory
pub const EXTENSIONS_FILE: &str = "vscode-extensions.txt";
