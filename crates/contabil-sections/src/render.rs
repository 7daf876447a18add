//! Section rendering on top of minijinja.

use minijinja::{Environment, Value};

use crate::{benefits, cta, divider, documents, process, services};

/// A block of a page that renders from its own configuration.
pub trait Section: Send + Sync {
    /// Name of the registered template that draws this section.
    fn template(&self) -> &'static str;

    /// Template context derived from the configuration.
    fn context(&self) -> Value;
}

/// Errors that can occur while rendering sections.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template {template}: {message}")]
    Template { template: String, message: String },

    #[error("Unsupported column count {0}: expected 4 or 5")]
    InvalidColumns(u8),
}

impl RenderError {
    fn template(name: &str, err: minijinja::Error) -> Self {
        RenderError::Template {
            template: name.to_string(),
            message: err.to_string(),
        }
    }
}

/// Template engine holding every section template.
pub struct SectionRenderer {
    env: Environment<'static>,
}

impl SectionRenderer {
    /// Create a renderer with the built-in section templates registered.
    pub fn new() -> Result<Self, RenderError> {
        let mut renderer = Self {
            env: Environment::new(),
        };

        renderer.env.add_filter("url", url_attr);

        for (name, source) in [
            (divider::TEMPLATE_NAME, divider::TEMPLATE),
            (divider::HEADING_TEMPLATE_NAME, divider::HEADING_TEMPLATE),
            (benefits::TEMPLATE_NAME, benefits::TEMPLATE),
            (cta::TEMPLATE_NAME, cta::TEMPLATE),
            (process::TEMPLATE_NAME, process::TEMPLATE),
            (documents::TEMPLATE_NAME, documents::TEMPLATE),
            (services::TEMPLATE_NAME, services::TEMPLATE),
        ] {
            renderer.add_template(name, source)?;
        }

        Ok(renderer)
    }

    /// Register an extra template, e.g. a page-local block.
    ///
    /// Names ending in `.html` are auto-escaped.
    pub fn add_template(
        &mut self,
        name: &'static str,
        source: &'static str,
    ) -> Result<(), RenderError> {
        self.env
            .add_template(name, source)
            .map_err(|e| RenderError::template(name, e))
    }

    /// Render one section to an HTML fragment.
    pub fn render(&self, section: &dyn Section) -> Result<String, RenderError> {
        let name = section.template();
        let tmpl = self
            .env
            .get_template(name)
            .map_err(|e| RenderError::template(name, e))?;

        tmpl.render(section.context())
            .map_err(|e| RenderError::template(name, e))
    }

    /// Render sections in order and concatenate the fragments.
    pub fn render_all(&self, sections: &[Box<dyn Section>]) -> Result<String, RenderError> {
        let mut html = String::new();
        for section in sections {
            html.push_str(&self.render(section.as_ref())?);
            html.push('\n');
        }
        Ok(html)
    }
}

/// Escape a path or URL for use inside a double-quoted attribute.
///
/// Registered as the `url` filter. The default HTML escaper also rewrites
/// `/`, which would make every `href` unreadable in the output.
pub fn url_attr(value: String) -> Value {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Value::from_safe_string(out)
}
