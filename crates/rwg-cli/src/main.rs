//! RWG CLI - React/webpack project generator
//!
//! Scaffolds webpack-based React projects and adds components to them.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod install;
mod prompts;

use commands::Cli;

/// Initialize tracing on stderr so generated output on stdout stays readable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "rwg=debug,rwg_codegen=debug,rwg_core=debug"
    } else {
        "rwg=info,rwg_codegen=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
