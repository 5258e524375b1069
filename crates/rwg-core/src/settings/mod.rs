//! The persisted config file (`.yo-rc.json`).
//!
//! Generator keys live under a single namespace object so the file can be
//! shared with other tools; foreign namespaces survive a save untouched.

pub mod model;

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{GenResult, GeneratorError};
use crate::GENERATED_WITH_VERSION;
use model::ProjectSettings;

/// File name of the persisted config.
pub const CONFIG_FILE: &str = ".yo-rc.json";

/// Namespace holding this generator's keys.
pub const NAMESPACE: &str = "generator-react-webpack";

/// Key/value view over the generator namespace of `.yo-rc.json`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    document: Map<String, Value>,
}

impl ConfigStore {
    /// Open the config in `project_dir`. A missing file yields an empty store.
    pub fn open(project_dir: &Path) -> GenResult<Self> {
        let path = project_dir.join(CONFIG_FILE);
        let document = if path.is_file() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Value>(&raw)? {
                Value::Object(map) => map,
                other => {
                    return Err(GeneratorError::not_initialized(format!(
                        "{} is not a JSON object (found {})",
                        path.display(),
                        other
                    )))
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the generator namespace is present.
    pub fn exists(&self) -> bool {
        self.namespace().is_some()
    }

    fn namespace(&self) -> Option<&Map<String, Value>> {
        self.document.get(NAMESPACE).and_then(Value::as_object)
    }

    fn namespace_mut(&mut self) -> &mut Map<String, Value> {
        let entry = self
            .document
            .entry(NAMESPACE)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        match entry {
            Value::Object(map) => map,
            _ => unreachable!("namespace was just set to an object"),
        }
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.namespace().and_then(|ns| ns.get(key))
    }

    /// All keys of the generator namespace.
    pub fn all(&self) -> Map<String, Value> {
        self.namespace().cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.namespace_mut().insert(key.to_string(), value);
    }

    /// Typed view of the stored settings.
    pub fn settings(&self) -> GenResult<ProjectSettings> {
        let ns = self.namespace().ok_or_else(|| {
            GeneratorError::not_initialized(format!(
                "no '{}' settings in {}",
                NAMESPACE,
                self.path.display()
            ))
        })?;
        Ok(serde_json::from_value(Value::Object(ns.clone()))?)
    }

    pub fn set_settings(&mut self, settings: &ProjectSettings) -> GenResult<()> {
        if let Value::Object(fields) = serde_json::to_value(settings)? {
            for (key, value) in fields {
                self.set(&key, value);
            }
        }
        Ok(())
    }

    /// The whole document as it would be saved.
    pub fn to_json(&self) -> GenResult<String> {
        let mut body = serde_json::to_string_pretty(&self.document)?;
        body.push('\n');
        Ok(body)
    }

    /// Write the config back to disk as pretty JSON.
    pub fn save(&self) -> GenResult<()> {
        std::fs::write(&self.path, self.to_json()?)
            .map_err(|e| GeneratorError::unwritable(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "saved project settings");
        Ok(())
    }
}

/// Walk up from `start` to the first directory holding `.yo-rc.json`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        absolute_dir(start)
    };
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
}

/// Absolute form of `dir`, resolving `.` and `..` against the current directory.
///
/// Directories that do not exist yet are joined onto the current directory.
pub fn absolute_dir(dir: &Path) -> PathBuf {
    if let Ok(canonical) = dir.canonicalize() {
        return canonical;
    }
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir.to_path_buf(),
    }
}

/// Reject projects generated by another major version.
pub fn ensure_supported(settings: &ProjectSettings) -> GenResult<()> {
    if settings.generated_with_version != GENERATED_WITH_VERSION {
        return Err(GeneratorError::UnsupportedVersion {
            found: settings.generated_with_version,
            expected: GENERATED_WITH_VERSION,
        });
    }
    Ok(())
}
