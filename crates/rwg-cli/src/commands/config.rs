//! Persisted settings inspection.

use anyhow::{Result, anyhow, bail};
use clap::Subcommand;
use colored::Colorize;
use rwg_core::settings::{find_project_root, CONFIG_FILE};
use rwg_core::ConfigStore;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show every stored setting
    Show,

    /// Print a single setting as JSON
    Get {
        /// Setting key, e.g. `style` or `generatedWithVersion`
        key: String,
    },
}

pub fn execute(cmd: ConfigCommands, project_dir: &Path) -> Result<()> {
    let root = find_project_root(project_dir).ok_or_else(|| {
        anyhow!("No {} found in {} or its parents.", CONFIG_FILE, project_dir.display())
    })?;
    let store = ConfigStore::open(&root)?;

    match cmd {
        ConfigCommands::Show => cmd_show(&store),
        ConfigCommands::Get { key } => cmd_get(&store, &key),
    }
}

fn cmd_show(store: &ConfigStore) -> Result<()> {
    let values = store.all();
    if values.is_empty() {
        println!("{}", "No generator settings stored.".dimmed());
        return Ok(());
    }

    println!("{} {}", "Settings".bold(), format!("({})", store.path().display()).dimmed());
    for (key, value) in &values {
        println!("  {:<22} {}", key.cyan(), value);
    }

    if let Err(e) = store.settings().and_then(|s| rwg_core::settings::ensure_supported(&s)) {
        println!();
        println!("{} {}", "!".yellow().bold(), e);
    }
    Ok(())
}

fn cmd_get(store: &ConfigStore, key: &str) -> Result<()> {
    match store.get(key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => bail!("No setting named '{}'", key),
    }
}
