//! The component subgenerator.
//!
//! Adds a React component, its stylesheet and a test to an existing project,
//! using the style language recorded in the project's settings.

use anyhow::{Context as _, Result};
use rwg_core::naming::ComponentName;
use rwg_core::settings::ensure_supported;
use rwg_core::ProjectSettings;
use serde::Serialize;
use std::path::Path;

use crate::output::{GeneratedFile, WritePolicy, WriteReport, write_files};
use crate::render::{Renderer, context_from};
use crate::templates::{COMPONENT, COMPONENT_TEST, component_style};

/// Flags of the component subgenerator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentOptions {
    /// Render a function component instead of a class.
    pub stateless: bool,
    /// Skip the stylesheet.
    pub no_style: bool,
}

#[derive(Debug, Serialize)]
struct ComponentContext {
    base: String,
    class_name: String,
    css_class: String,
    display_name: String,
    dir_prefix: String,
    style_ext: &'static str,
    with_style: bool,
    stateless: bool,
}

/// Render the files for component `name`.
pub fn generate_component(
    name: &str,
    settings: &ProjectSettings,
    options: ComponentOptions,
) -> Result<Vec<GeneratedFile>> {
    ensure_supported(settings)?;
    let name = ComponentName::parse(name)?;
    let renderer = Renderer::new()?;

    let ctx = ComponentContext {
        base: name.base.clone(),
        class_name: name.class_name(),
        css_class: name.css_class(),
        display_name: name.display_name(),
        dir_prefix: name.dir_prefix(),
        style_ext: settings.style.extension(),
        with_style: !options.no_style,
        stateless: options.stateless,
    };
    let context = context_from(&ctx)?;

    let mut files = vec![GeneratedFile::new(
        format!("src/components/{}{}.js", ctx.dir_prefix, ctx.class_name),
        renderer.render(COMPONENT, &context)?,
    )];

    if ctx.with_style {
        let template = component_style(ctx.style_ext);
        files.push(GeneratedFile::new(
            format!("src/styles/{}{}.{}", ctx.dir_prefix, ctx.base, ctx.style_ext),
            renderer
                .render(&template, &context)
                .with_context(|| format!("No stylesheet template for '{}'", settings.style))?,
        ));
    }

    files.push(GeneratedFile::new(
        format!("test/components/{}{}Test.js", ctx.dir_prefix, ctx.class_name),
        renderer.render(COMPONENT_TEST, &context)?,
    ));

    tracing::info!(component = %ctx.display_name, files = files.len(), "rendered component");
    Ok(files)
}

/// Write component files into the project at `project_root`.
pub fn write_component(files: &[GeneratedFile], project_root: &Path, policy: WritePolicy) -> Result<WriteReport> {
    write_files(files, project_root, policy)
}
