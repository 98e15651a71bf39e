//! vsenv core - extension reconciliation and settings sync
//!
//! This crate records the VS Code extension set and user settings into a
//! working directory, and reconciles or restores the live editor state
//! against those recordings.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod config;
pub mod extensions;
pub mod settings;

pub use config::{Config, Platform};
pub use extensions::{EditorCli, ExtensionError, ExtensionHost, ExtensionList};
pub use settings::SettingsError;
