//! Ordered steps of a process, one card per step.

use minijinja::{context, Value};

use crate::glyph::Glyph;
use crate::render::Section;
use crate::style::{Background, Columns};

pub(crate) const TEMPLATE_NAME: &str = "process.html";

pub(crate) const TEMPLATE: &str = r#"<section class="section process-section {{ background.section }} {{ class }}">
  <div class="container">
    {% include "section-heading.html" %}
    {% if steps %}
    <ol class="grid grid-cols-1 md:grid-cols-2 {{ columns_class }} gap-6">
      {% for step in steps %}
      <li class="card step-card {{ background.panel }}">
        <span class="step-label">{{ step.step }}</span>
        <div class="card-icon">{{ step.icon }}</div>
        <h3 class="card-title">{{ step.title }}</h3>
        <p class="card-text">{{ step.description }}</p>
      </li>
      {% endfor %}
    </ol>
    {% endif %}
  </div>
</section>"#;

#[derive(Debug, Clone)]
pub struct ProcessStep {
    /// Short free-form label, usually an ordinal.
    pub step: String,
    pub title: String,
    pub description: String,
    pub icon: &'static dyn Glyph,
}

impl ProcessStep {
    pub fn new(
        step: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: &'static dyn Glyph,
    ) -> Self {
        Self {
            step: step.into(),
            title: title.into(),
            description: description.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessSteps {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<ProcessStep>,
    pub class: String,
    pub background: Background,
    pub columns: Columns,
}

impl Section for ProcessSteps {
    fn template(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn context(&self) -> Value {
        let background = self.background.tokens();
        let steps: Vec<Value> = self
            .steps
            .iter()
            .map(|step| {
                context! {
                    step => &step.step,
                    title => &step.title,
                    description => &step.description,
                    icon => Value::from_safe_string(step.icon.render(28, "card-glyph")),
                }
            })
            .collect();

        context! {
            title => &self.title,
            subtitle => &self.subtitle,
            steps => steps,
            class => &self.class,
            columns_class => self.columns.grid_class(),
            background => context! {
                section => background.section,
                panel => background.panel,
            },
        }
    }
}
