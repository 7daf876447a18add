//! Decorative three-part rule placed under section headings.

use minijinja::{context, Value};

use crate::render::Section;

pub(crate) const TEMPLATE_NAME: &str = "divider.html";

// Included by the other section templates, which set `divider_class` and may
// recolor the bars and dot on dark backgrounds.
pub(crate) const TEMPLATE: &str = r#"<div class="section-divider {{ divider_class }}" role="presentation">
  <span class="divider-bar {{ divider_bar|default("bg-primary") }}"></span>
  <span class="divider-dot {{ divider_dot|default("bg-accent") }}"></span>
  <span class="divider-bar {{ divider_bar|default("bg-primary") }}"></span>
</div>"#;

pub(crate) const HEADING_TEMPLATE_NAME: &str = "section-heading.html";

pub(crate) const HEADING_TEMPLATE: &str = r#"<div class="section-heading">
  <h2 class="section-title">{{ title }}</h2>
  {% with divider_class = "my-6" %}{% include "divider.html" %}{% endwith %}
  {% if subtitle %}<p class="section-subtitle">{{ subtitle }}</p>{% endif %}
</div>"#;

#[derive(Debug, Clone, Default)]
pub struct SectionDivider {
    /// Extra classes appended to the wrapper.
    pub class: String,
}

impl Section for SectionDivider {
    fn template(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn context(&self) -> Value {
        context! { divider_class => &self.class }
    }
}
