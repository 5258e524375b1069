//! Prompt and answer models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::GeneratorError;

/// Stylesheet language used by generated components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLanguage {
    #[default]
    Css,
    Sass,
    Scss,
    Less,
    Stylus,
}

impl StyleLanguage {
    pub const ALL: [StyleLanguage; 5] = [
        StyleLanguage::Css,
        StyleLanguage::Sass,
        StyleLanguage::Scss,
        StyleLanguage::Less,
        StyleLanguage::Stylus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleLanguage::Css => "css",
            StyleLanguage::Sass => "sass",
            StyleLanguage::Scss => "scss",
            StyleLanguage::Less => "less",
            StyleLanguage::Stylus => "stylus",
        }
    }

    /// File extension for stylesheets in this language.
    pub fn extension(&self) -> &'static str {
        match self {
            StyleLanguage::Stylus => "styl",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for StyleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleLanguage {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == wanted)
            .ok_or_else(|| GeneratorError::invalid_answer("style", s))
    }
}

/// How a prompt is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text.
    Input,
    /// One of a fixed set of choices.
    List(Vec<&'static str>),
    /// Yes/no.
    Confirm,
}

/// A named question with a default answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub name: &'static str,
    pub message: &'static str,
    pub kind: PromptKind,
    pub default: Value,
}

impl Prompt {
    /// Index of the default choice for list prompts.
    pub fn default_index(&self) -> usize {
        match (&self.kind, self.default.as_str()) {
            (PromptKind::List(choices), Some(default)) => {
                choices.iter().position(|c| *c == default).unwrap_or(0)
            }
            _ => 0,
        }
    }
}

/// Resolved answers for the app generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub app_name: String,
    pub style: StyleLanguage,
    pub postcss: bool,
}
