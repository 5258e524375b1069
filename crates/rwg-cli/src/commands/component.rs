//! Component subgenerator command.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use rwg_codegen::{ComponentOptions, WritePolicy};
use rwg_core::settings::{find_project_root, CONFIG_FILE};
use rwg_core::ConfigStore;
use std::path::Path;

#[derive(Args)]
pub struct ComponentArgs {
    /// Component path, e.g. `items/list` or `Button`
    pub name: String,

    /// Generate a stateless function component
    #[arg(long)]
    pub stateless: bool,

    /// Do not generate a stylesheet
    #[arg(long = "nostyle")]
    pub no_style: bool,

    /// Overwrite existing component files
    #[arg(short, long)]
    pub force: bool,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: ComponentArgs, project_dir: &Path) -> Result<()> {
    let root = find_project_root(project_dir).ok_or_else(|| {
        anyhow!(
            "No {} found in {} or its parents. Run 'rwg app' first.",
            CONFIG_FILE,
            project_dir.display()
        )
    })?;
    let settings = ConfigStore::open(&root)?.settings()?;

    let options = ComponentOptions {
        stateless: args.stateless,
        no_style: args.no_style,
    };
    let files = rwg_codegen::generate_component(&args.name, &settings, options)?;

    if args.dry_run {
        println!("{} Would generate {} files:", "→".dimmed(), files.len());
        for file in &files {
            println!("  {}", file.path.display());
            println!("{}", "─".repeat(40));
            println!("{}", file.text().unwrap_or("<binary>"));
        }
        return Ok(());
    }

    let policy = if args.force {
        WritePolicy::Overwrite
    } else {
        WritePolicy::Abort
    };
    let report = rwg_codegen::write_component(&files, &root, policy)?;

    println!(
        "{} Generated component {} ({} files)",
        "✓".green().bold(),
        args.name.cyan(),
        report.written()
    );
    for path in report.created.iter().chain(&report.overwritten) {
        println!("  {}", path.display());
    }

    Ok(())
}
