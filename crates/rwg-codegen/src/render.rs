//! Tera-backed template renderer.

use rwg_core::{GenResult, GeneratorError};
use tera::{Context, Tera};

use crate::templates::{APP_TEMPLATES, COMPONENT_TEMPLATES, TemplateSource};

/// Renders the embedded tera templates by name.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Build a renderer holding every embedded tera template.
    pub fn new() -> GenResult<Self> {
        let app = APP_TEMPLATES.iter().filter_map(|t| match t.source {
            TemplateSource::Tera(body) => Some((t.dest, body)),
            _ => None,
        });
        let component = COMPONENT_TEMPLATES.iter().copied();

        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(app.chain(component))
            .map_err(template_error)?;
        Ok(Self { tera })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render `name` with `context`.
    pub fn render(&self, name: &str, context: &Context) -> GenResult<String> {
        if !self.has_template(name) {
            return Err(GeneratorError::TemplateMissing(name.to_string()));
        }
        self.tera.render(name, context).map_err(template_error)
    }
}

/// Build a tera context from any serializable value.
pub fn context_from<T: serde::Serialize>(value: &T) -> GenResult<Context> {
    Context::from_serialize(value).map_err(template_error)
}

/// Flatten a tera error and its causes into one message.
fn template_error(err: tera::Error) -> GeneratorError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    GeneratorError::Template(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_is_missing() {
        let renderer = Renderer::new().unwrap();
        let err = renderer.render("component/style.pcss", &Context::new()).unwrap_err();
        assert!(matches!(err, GeneratorError::TemplateMissing(ref n) if n == "component/style.pcss"));
    }

    #[test]
    fn test_missing_variable_is_template_error() {
        let renderer = Renderer::new().unwrap();
        let err = renderer.render("package.json", &Context::new()).unwrap_err();
        assert!(matches!(err, GeneratorError::Template(_)));
    }

    #[test]
    fn test_html_is_escaped() {
        let renderer = Renderer::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("app_name", "<Shop & Co>");
        let html = renderer.render("src/index.html", &ctx).unwrap();
        assert!(html.contains("<title>&lt;Shop &amp; Co&gt;</title>"));
    }
}
