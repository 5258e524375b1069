//! Generator prompts and answer resolution.

pub mod model;

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{GenResult, GeneratorError};
use crate::settings::absolute_dir;
use model::{Answers, Prompt, PromptKind, StyleLanguage};

pub const APP_NAME: &str = "appName";
pub const STYLE: &str = "style";
pub const POSTCSS: &str = "postcss";

/// The app generator's prompts, in the order they are asked.
pub fn default_prompts(default_app_name: &str) -> Vec<Prompt> {
    vec![
        Prompt {
            name: APP_NAME,
            message: "Please choose your application name",
            kind: PromptKind::Input,
            default: Value::String(default_app_name.to_string()),
        },
        Prompt {
            name: STYLE,
            message: "Which style language do you want to use?",
            kind: PromptKind::List(StyleLanguage::ALL.iter().map(|s| s.as_str()).collect()),
            default: Value::String(StyleLanguage::default().as_str().to_string()),
        },
        Prompt {
            name: POSTCSS,
            message: "Enable postcss?",
            kind: PromptKind::Confirm,
            default: Value::Bool(false),
        },
    ]
}

/// Default application name for a target directory: its basename.
///
/// Relative paths such as `.` are resolved first.
pub fn default_app_name(dir: &Path) -> String {
    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        absolute_dir(dir)
    };
    dir.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("app")
        .to_string()
}

impl Answers {
    /// Every prompt answered with its default.
    pub fn defaults(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            style: StyleLanguage::default(),
            postcss: false,
        }
    }

    /// Build answers from a flat record keyed by prompt name.
    ///
    /// Missing keys take the prompt default. Unknown keys are ignored.
    pub fn from_values(values: &Map<String, Value>, default_app_name: &str) -> GenResult<Self> {
        let mut answers = Self::defaults(default_app_name);

        if let Some(value) = values.get(APP_NAME) {
            let name = value
                .as_str()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| GeneratorError::invalid_answer(APP_NAME, value))?;
            answers.app_name = name.to_string();
        }

        if let Some(value) = values.get(STYLE) {
            let style = value
                .as_str()
                .ok_or_else(|| GeneratorError::invalid_answer(STYLE, value))?;
            answers.style = style.parse()?;
        }

        if let Some(value) = values.get(POSTCSS) {
            answers.postcss = parse_bool(value)
                .ok_or_else(|| GeneratorError::invalid_answer(POSTCSS, value))?;
        }

        Ok(answers)
    }

    /// Answers as a flat record keyed by prompt name.
    pub fn to_values(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(APP_NAME.into(), Value::String(self.app_name.clone()));
        map.insert(STYLE.into(), Value::String(self.style.as_str().into()));
        map.insert(POSTCSS.into(), Value::Bool(self.postcss));
        map
    }
}

fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "y" => Some(true),
            "false" | "no" | "n" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
