//! Centralized error types for RWG.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for generator operations.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Target path is not writable: {}", path.display())]
    TargetUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template missing: {0}")]
    TemplateMissing(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid answer for prompt '{prompt}': {value}")]
    InvalidAnswer { prompt: String, value: String },

    #[error("Invalid component name: {0}")]
    InvalidName(String),

    #[error("Refusing to overwrite existing file: {}", path.display())]
    Conflict { path: PathBuf },

    #[error("Cannot rewrite {file}: {reason}")]
    Transform { file: String, reason: String },

    #[error(
        "Project was generated with version {found}, this generator writes version {expected}"
    )]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Not initialized: {0}")]
    NotInitialized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GeneratorError>;

impl GeneratorError {
    /// Wrap an IO failure on `path` as an unwritable target.
    pub fn unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TargetUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid answer error.
    pub fn invalid_answer(prompt: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidAnswer {
            prompt: prompt.into(),
            value: value.to_string(),
        }
    }

    /// Create a transform error for a generated file.
    pub fn transform(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transform {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a not initialized error.
    pub fn not_initialized(msg: impl Into<String>) -> Self {
        Self::NotInitialized(msg.into())
    }
}
