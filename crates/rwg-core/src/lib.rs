//! RWG Core Library
//!
//! Prompt definitions, persisted project settings and naming rules for the
//! React/webpack project generator.

pub mod error;
pub mod naming;
pub mod prompt;
pub mod settings;

pub use error::{GenResult, GeneratorError};
pub use prompt::model::{Answers, Prompt, PromptKind, StyleLanguage};
pub use settings::model::ProjectSettings;
pub use settings::ConfigStore;

/// Major version of the generator, recorded as `generatedWithVersion`.
pub const GENERATED_WITH_VERSION: u32 = 3;
