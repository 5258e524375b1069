//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rwg_core::settings::absolute_dir;
use std::path::PathBuf;

pub mod app;
pub mod component;
pub mod config;

/// React/webpack project generator
#[derive(Parser)]
#[command(name = "rwg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new React/webpack application
    App(app::AppArgs),

    /// Add a component to an existing project
    Component(component::ComponentArgs),

    /// Inspect the persisted project settings
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => absolute_dir(&dir),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };

        match self.command {
            Commands::App(args) => app::execute(args, &project_dir).await,
            Commands::Component(args) => component::execute(args, &project_dir),
            Commands::Config(cmd) => config::execute(cmd, &project_dir),
        }
    }
}
