//! Grid of benefit cards, each with an icon.

use minijinja::{context, Value};

use crate::glyph::Glyph;
use crate::render::Section;

pub(crate) const TEMPLATE_NAME: &str = "benefits.html";

pub(crate) const TEMPLATE: &str = r#"<section class="section benefits-section bg-white {{ class }}">
  <div class="container">
    {% include "section-heading.html" %}
    {% if benefits %}
    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
      {% for benefit in benefits %}
      <article class="card benefit-card">
        <div class="card-icon">{{ benefit.icon }}</div>
        <h3 class="card-title">{{ benefit.title }}</h3>
        <p class="card-text">{{ benefit.description }}</p>
      </article>
      {% endfor %}
    </div>
    {% endif %}
  </div>
</section>"#;

const ICON_SIZE: u32 = 32;

#[derive(Debug, Clone)]
pub struct Benefit {
    pub icon: &'static dyn Glyph,
    pub title: String,
    pub description: String,
}

impl Benefit {
    pub fn new(
        icon: &'static dyn Glyph,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }

    fn context(&self) -> Value {
        context! {
            icon => Value::from_safe_string(self.icon.render(ICON_SIZE, "card-glyph")),
            title => &self.title,
            description => &self.description,
        }
    }
}

/// Heading plus a responsive 1/2/4 column grid of benefits.
#[derive(Debug, Clone, Default)]
pub struct BenefitsSection {
    pub title: String,
    pub subtitle: String,
    pub benefits: Vec<Benefit>,
    pub class: String,
}

impl Section for BenefitsSection {
    fn template(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn context(&self) -> Value {
        let benefits: Vec<Value> = self.benefits.iter().map(Benefit::context).collect();

        context! {
            title => &self.title,
            subtitle => &self.subtitle,
            benefits => benefits,
            class => &self.class,
        }
    }
}
