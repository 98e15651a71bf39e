//! CLI command handlers
//!
//! Extension commands live in `extensions`, settings commands in `settings`.

pub mod extensions;
pub mod settings;

use crate::Commands;
use vsenv_core::Config;

/// Dispatch a parsed command
pub fn execute(command: &Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Backup => {
            extensions::backup(config)?;
            settings::backup(config)
        }
        Commands::Comp { json } => extensions::compare(config, *json),
        Commands::Install => extensions::install(config),
        Commands::Uninstall => extensions::uninstall(config),
        Commands::Diff => settings::diff(config),
        Commands::Restore => settings::restore(config),
    }
}
