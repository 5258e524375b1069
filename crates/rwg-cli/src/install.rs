//! Dependency installation for freshly generated projects.

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    NpmMissing,
}

/// Run `npm install` in `dir` behind a spinner.
pub async fn npm_install(dir: &Path) -> Result<InstallOutcome> {
    let npm = if cfg!(windows) { "npm.cmd" } else { "npm" };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?);
    spinner.set_message("Installing npm dependencies...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    tracing::debug!(dir = %dir.display(), "running npm install");
    let result = Command::new(npm)
        .arg("install")
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;
    spinner.finish_and_clear();

    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("npm is not installed");
            Ok(InstallOutcome::NpmMissing)
        }
        Err(e) => Err(e).context("Failed to run npm install"),
        Ok(output) if output.status.success() => Ok(InstallOutcome::Installed),
        Ok(output) => bail!(
            "npm install failed ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ),
    }
}
