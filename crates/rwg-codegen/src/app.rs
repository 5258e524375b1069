//! The app generator: renders a full project skeleton from prompt answers.

use anyhow::{Context as _, Result};
use rwg_core::naming::package_name;
use rwg_core::settings::CONFIG_FILE;
use rwg_core::{Answers, ConfigStore, ProjectSettings};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::output::{GeneratedFile, WritePolicy, WriteReport, write_files};
use crate::render::{Renderer, context_from};
use crate::templates::{APP_TEMPLATES, TemplateSource};
use crate::postcss;

/// Variables visible to the app templates.
#[derive(Debug, Serialize)]
struct AppContext<'a> {
    app_name: &'a str,
    package_name: String,
    style: &'static str,
    style_ext: &'static str,
    postcss: bool,
}

/// A rendered app skeleton, not yet on disk.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub answers: Answers,
    pub files: Vec<GeneratedFile>,
}

impl GeneratedProject {
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == Path::new(path))
    }

    /// Destination paths, including the persisted config written alongside.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.files.iter().map(|f| f.path.clone()).collect();
        paths.push(PathBuf::from(CONFIG_FILE));
        paths
    }
}

/// Render the app skeleton for `answers`.
pub fn generate_app(answers: &Answers) -> Result<GeneratedProject> {
    let renderer = Renderer::new()?;
    let context = context_from(&AppContext {
        app_name: &answers.app_name,
        package_name: package_name(&answers.app_name),
        style: answers.style.as_str(),
        style_ext: answers.style.extension(),
        postcss: answers.postcss,
    })?;

    let mut files = Vec::with_capacity(APP_TEMPLATES.len());
    for template in APP_TEMPLATES {
        let contents = match template.source {
            TemplateSource::Static(body) => body.as_bytes().to_vec(),
            TemplateSource::Binary(bytes) => bytes.to_vec(),
            TemplateSource::Tera(_) => renderer
                .render(template.dest, &context)
                .with_context(|| format!("Failed to render {}", template.dest))?
                .into_bytes(),
        };
        files.push(GeneratedFile::new(template.dest, contents));
    }

    if answers.postcss {
        postcss::apply(&mut files).context("Failed to enable PostCSS")?;
    }

    tracing::info!(
        app = %answers.app_name,
        style = %answers.style,
        postcss = answers.postcss,
        files = files.len(),
        "rendered app skeleton"
    );

    Ok(GeneratedProject {
        answers: answers.clone(),
        files,
    })
}

/// Write the skeleton into `target_dir` and record the answers in `.yo-rc.json`.
pub fn write_app(project: &GeneratedProject, target_dir: &Path, policy: WritePolicy) -> Result<WriteReport> {
    let mut report = write_files(&project.files, target_dir, policy)?;

    let mut store = ConfigStore::open(target_dir)
        .with_context(|| format!("Failed to read {}", target_dir.join(CONFIG_FILE).display()))?;
    let on_disk = std::fs::read(store.path()).ok();
    store.set_settings(&ProjectSettings::from_answers(&project.answers))?;

    let config = PathBuf::from(CONFIG_FILE);
    match on_disk {
        Some(existing) if existing == store.to_json()?.as_bytes() => {
            tracing::debug!(path = %config.display(), "identical");
            report.identical.push(config);
        }
        Some(_) => {
            store.save()?;
            report.overwritten.push(config);
        }
        None => {
            store.save()?;
            report.created.push(config);
        }
    }

    tracing::info!(
        target = %target_dir.display(),
        written = report.written(),
        "wrote app skeleton"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rwg_core::StyleLanguage;

    #[test]
    fn test_package_and_title_use_app_name() {
        let project = generate_app(&Answers::defaults("My Shop")).unwrap();

        let package: serde_json::Value =
            serde_json::from_str(project.file("package.json").unwrap().text().unwrap()).unwrap();
        assert_eq!(package["name"], "my-shop");

        let html = project.file("src/index.html").unwrap().text().unwrap();
        assert!(html.contains("<title>My Shop</title>"));
    }

    #[test]
    fn test_postcss_off_leaves_defaults_untouched() {
        let project = generate_app(&Answers::defaults("plain")).unwrap();
        let defaults = project.file("cfg/defaults.js").unwrap().text().unwrap();
        assert!(!defaults.contains("postcss"));
        assert!(defaults.contains("loader: 'style-loader!css-loader'"));

        let package = project.file("package.json").unwrap().text().unwrap();
        assert!(!package.contains("postcss-loader"));
    }

    #[test]
    fn test_postcss_on_adds_dependency() {
        let mut answers = Answers::defaults("styled");
        answers.postcss = true;
        answers.style = StyleLanguage::Less;
        let project = generate_app(&answers).unwrap();

        let package: serde_json::Value =
            serde_json::from_str(project.file("package.json").unwrap().text().unwrap()).unwrap();
        assert_eq!(package["devDependencies"]["postcss-loader"], postcss::POSTCSS_LOADER_VERSION);
    }

    #[test]
    fn test_binary_assets_kept_verbatim() {
        let project = generate_app(&Answers::defaults("assets")).unwrap();
        let png = &project.file("src/images/yeoman.png").unwrap().contents;
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let ico = &project.file("src/favicon.ico").unwrap().contents;
        assert!(ico.starts_with(&[0, 0, 1, 0]));
    }

    #[test]
    fn test_paths_include_persisted_config() {
        let project = generate_app(&Answers::defaults("paths")).unwrap();
        assert_eq!(project.paths().last(), Some(&PathBuf::from(".yo-rc.json")));
        assert_eq!(project.paths().len(), APP_TEMPLATES.len() + 1);
    }

    #[test]
    fn test_rewrite_keeps_foreign_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{ "other": { "x": 1 } }"#).unwrap();

        let project = generate_app(&Answers::defaults("merge")).unwrap();
        let report = write_app(&project, dir.path(), WritePolicy::Abort).unwrap();
        assert!(report.overwritten.contains(&PathBuf::from(CONFIG_FILE)));
        assert!(!report.created.contains(&PathBuf::from(CONFIG_FILE)));

        let store = ConfigStore::open(dir.path()).unwrap();
        assert_eq!(store.get("appName"), Some(&serde_json::json!("merge")));
        let raw = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(raw.contains("\"other\""));
    }
}
