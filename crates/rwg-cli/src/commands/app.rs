//! App generation command.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use rwg_codegen::WritePolicy;
use rwg_core::prompt::{APP_NAME, POSTCSS, STYLE, default_app_name, default_prompts};
use rwg_core::{Answers, StyleLanguage};
use serde_json::{Map, Value};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::install::{self, InstallOutcome};
use crate::prompts;

#[derive(Args)]
pub struct AppArgs {
    /// Target directory (defaults to the project directory)
    pub directory: Option<PathBuf>,

    /// Application name
    #[arg(long)]
    pub app_name: Option<String>,

    /// Style language: css, sass, scss, less or stylus
    #[arg(long)]
    pub style: Option<StyleLanguage>,

    /// Enable PostCSS (`--postcss` or `--postcss=false`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub postcss: Option<bool>,

    /// Prompt answers as a JSON object, or @path to a JSON file
    #[arg(long)]
    pub answers: Option<String>,

    /// Do not prompt; use defaults for anything not given
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite files that differ from the templates
    #[arg(short, long, conflicts_with = "skip_existing")]
    pub force: bool,

    /// Keep files that differ from the templates
    #[arg(long)]
    pub skip_existing: bool,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Do not run `npm install` afterwards
    #[arg(long, env = "RWG_SKIP_INSTALL")]
    pub skip_install: bool,

    /// Do not print the welcome banner
    #[arg(long, env = "RWG_SKIP_WELCOME_MESSAGE")]
    pub skip_welcome_message: bool,
}

impl AppArgs {
    fn write_policy(&self) -> WritePolicy {
        if self.force {
            WritePolicy::Overwrite
        } else if self.skip_existing {
            WritePolicy::SkipExisting
        } else {
            WritePolicy::Abort
        }
    }
}

pub async fn execute(args: AppArgs, project_dir: &Path) -> Result<()> {
    let target_dir = match &args.directory {
        Some(dir) => project_dir.join(dir),
        None => project_dir.to_path_buf(),
    };

    if !args.skip_welcome_message {
        print_welcome();
    }

    let interactive = !args.yes && std::io::stdin().is_terminal();
    let answers = resolve_answers(&args, &target_dir, interactive)?;

    println!(
        "{} Creating project: {} ({}{})",
        "→".blue().bold(),
        answers.app_name.cyan(),
        answers.style,
        if answers.postcss { " + postcss" } else { "" }
    );

    let project = rwg_codegen::generate_app(&answers)?;

    if args.dry_run {
        println!("{} Would generate {} files:", "→".dimmed(), project.paths().len());
        for path in project.paths() {
            println!("  {}", target_dir.join(path).display());
        }
        return Ok(());
    }

    let report = rwg_codegen::write_app(&project, &target_dir, args.write_policy())?;
    print_report(&report);

    if args.skip_install {
        tracing::debug!("skipping npm install");
    } else {
        match install::npm_install(&target_dir).await? {
            InstallOutcome::Installed => println!("{} Dependencies installed", "✓".green().bold()),
            InstallOutcome::NpmMissing => println!(
                "{} npm not found; run 'npm install' in {} yourself",
                "!".yellow().bold(),
                target_dir.display()
            ),
        }
    }

    println!();
    println!("{} Project created: {}", "✓".green().bold(), answers.app_name.cyan());
    println!("  Directory: {}", target_dir.display());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  cd {}", target_dir.display());
    println!("  npm start                      # Start the dev server");
    println!("  rwg component <name>           # Add a component");

    Ok(())
}

/// Merge answers by precedence: flags, `--answers`, interactive prompts, defaults.
pub(crate) fn resolve_answers(args: &AppArgs, target_dir: &Path, interactive: bool) -> Result<Answers> {
    let default_name = default_app_name(target_dir);

    let mut values = match &args.answers {
        Some(raw) => load_answers(raw)?,
        None => Map::new(),
    };

    if let Some(name) = &args.app_name {
        values.insert(APP_NAME.into(), Value::String(name.clone()));
    }
    if let Some(style) = args.style {
        values.insert(STYLE.into(), Value::String(style.as_str().into()));
    }
    if let Some(postcss) = args.postcss {
        values.insert(POSTCSS.into(), Value::Bool(postcss));
    }

    if interactive {
        prompts::ask_missing(&default_prompts(&default_name), &mut values)?;
    }

    Ok(Answers::from_values(&values, &default_name)?)
}

fn load_answers(raw: &str) -> Result<Map<String, Value>> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file {}", path))?,
        None => raw.to_string(),
    };

    match serde_json::from_str::<Value>(&text).context("--answers is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("--answers must be a JSON object, got {}", other),
    }
}

fn print_welcome() {
    println!();
    println!("{}", "  React + webpack project generator".bold());
    println!("{}", "  Answer a few questions and your project is ready.".dimmed());
    println!();
}

fn print_report(report: &rwg_codegen::WriteReport) {
    for path in &report.created {
        println!("  {} {}", "create".green(), path.display());
    }
    for path in &report.overwritten {
        println!("  {} {}", "force".yellow(), path.display());
    }
    for path in &report.identical {
        println!("  {} {}", "identical".cyan(), path.display());
    }
    for path in &report.skipped {
        println!("  {} {}", "skip".dimmed(), path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: AppArgs,
    }

    fn parse(argv: &[&str]) -> AppArgs {
        let mut full = vec!["rwg"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn test_defaults_without_prompting() {
        let args = parse(&["--yes"]);
        let answers = resolve_answers(&args, Path::new("/work/landing-page"), false).unwrap();
        assert_eq!(answers, Answers::defaults("landing-page"));
    }

    #[test]
    fn test_flags_override_answers_json() {
        let args = parse(&[
            "--answers",
            r#"{"appName": "from-json", "style": "less", "postcss": false}"#,
            "--style",
            "scss",
            "--postcss",
        ]);
        let answers = resolve_answers(&args, Path::new("/work/x"), false).unwrap();
        assert_eq!(answers.app_name, "from-json");
        assert_eq!(answers.style, StyleLanguage::Scss);
        assert!(answers.postcss);
    }

    #[test]
    fn test_postcss_explicit_false() {
        let args = parse(&["--postcss=false", "out"]);
        assert_eq!(args.postcss, Some(false));
        assert_eq!(args.directory, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_answers_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("answers.json");
        std::fs::write(&file, r#"{"style": "stylus"}"#).unwrap();

        let at_path = format!("@{}", file.display());
        let args = parse(&["--answers", &at_path]);
        let answers = resolve_answers(&args, Path::new("/work/site"), false).unwrap();
        assert_eq!(answers.style, StyleLanguage::Stylus);
        assert_eq!(answers.app_name, "site");
    }

    #[test]
    fn test_answers_must_be_object() {
        let args = parse(&["--answers", "[1, 2]"]);
        assert!(resolve_answers(&args, Path::new("/work/x"), false).is_err());
    }

    #[test]
    fn test_write_policy_from_flags() {
        assert_eq!(parse(&[]).write_policy(), WritePolicy::Abort);
        assert_eq!(parse(&["--force"]).write_policy(), WritePolicy::Overwrite);
        assert_eq!(parse(&["--skip-existing"]).write_policy(), WritePolicy::SkipExisting);
    }
}
