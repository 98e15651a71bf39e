//! vsenv CLI - VS Code environment manager
//!
//! Records the installed extensions and user settings into the working
//! directory, and reconciles or restores the editor against them.

mod commands;
mod logging;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use vsenv_core::{Config, Platform};

#[derive(Parser)]
#[command(name = "vsenv")]
#[command(about = "vsenv - VS Code extensions and settings manager")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Editor program used for extension management
    #[arg(long, env = "VSENV_EDITOR", global = true)]
    editor: Option<PathBuf>,

    /// Directory holding vscode-extensions.txt and vscode-settings.jsonc
    #[arg(long, env = "VSENV_DIR", default_value = ".", global = true)]
    dir: PathBuf,

    /// Live settings.json to use instead of the platform default
    #[arg(long, env = "VSENV_SETTINGS", global = true)]
    settings: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Backup extensions list to vscode-extensions.txt and settings to vscode-settings.jsonc
    Backup,
    /// Compare extensions between vscode-extensions.txt and the editor
    Comp {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Install extensions listed in vscode-extensions.txt but missing from the editor
    Install,
    /// Uninstall extensions not listed in vscode-extensions.txt
    Uninstall,
    /// Compare vscode-settings.jsonc with the editor's settings.json
    Diff,
    /// Restore vscode-settings.jsonc to the editor's settings.json
    Restore,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Unrecognized input is not a failure: show usage and exit cleanly
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                _ => print_usage(),
            }
            return;
        }
    };

    logging::init(cli.verbose, cli.quiet);

    let config = build_config(&cli);
    tracing::debug!(?config, "resolved configuration");

    if let Err(e) = commands::execute(&cli.command, &config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_long_help());
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config::new(Platform::current()).with_work_dir(cli.dir.clone());
    if let Some(editor) = &cli.editor {
        config = config.with_editor(editor.clone());
    }
    if let Some(settings) = &cli.settings {
        config = config.with_settings_path(settings.clone());
    }
    config
}
