//! # RWG Codegen
//!
//! Renders React/webpack project skeletons.
//!
//! Produces the app tree (webpack config, source and test skeletons, dot
//! files), applies the PostCSS branch, and renders components into an
//! existing project using its persisted settings.

pub mod app;
pub mod component;
pub mod output;
pub mod postcss;
pub mod render;
pub mod templates;

pub use app::{GeneratedProject, generate_app, write_app};
pub use component::{ComponentOptions, generate_component, write_component};
pub use output::{GeneratedFile, WritePolicy, WriteReport, write_files};
pub use render::Renderer;
