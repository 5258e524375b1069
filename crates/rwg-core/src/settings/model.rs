//! Persisted settings model.

use serde::{Deserialize, Serialize};

use crate::prompt::model::{Answers, StyleLanguage};
use crate::GENERATED_WITH_VERSION;

/// Options recorded in `.yo-rc.json` for a generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    pub app_name: String,
    pub style: StyleLanguage,
    pub postcss: bool,
    pub generated_with_version: u32,
}

impl ProjectSettings {
    /// Settings for a project generated now from `answers`.
    pub fn from_answers(answers: &Answers) -> Self {
        Self {
            app_name: answers.app_name.clone(),
            style: answers.style,
            postcss: answers.postcss,
            generated_with_version: GENERATED_WITH_VERSION,
        }
    }
}
