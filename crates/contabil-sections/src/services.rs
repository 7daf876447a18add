//! Service catalogue cards with feature bullets.

use minijinja::{context, Value};

use crate::icons::check_mark;
use crate::render::Section;
use crate::route::Route;
use crate::style::Background;

pub(crate) const TEMPLATE_NAME: &str = "services.html";

pub(crate) const TEMPLATE: &str = r#"<section class="section services-section {{ background.section }} {{ class }}">
  <div class="container">
    {% include "section-heading.html" %}
    {% if services %}
    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
      {% for service in services %}
      <article class="card service-card {{ background.panel }}">
        <h3 class="card-title">{{ service.title }}</h3>
        <p class="card-text">{{ service.description }}</p>
        {% if service.features %}
        <ul class="service-features">
          {% for feature in service.features %}
          <li class="service-feature">{{ check }}<span>{{ feature }}</span></li>
          {% endfor %}
        </ul>
        {% endif %}
        <a href="{{ contact|url }}" class="btn btn-primary service-link">{{ button_label }}</a>
      </article>
      {% endfor %}
    </div>
    {% endif %}
  </div>
</section>"#;

pub const DEFAULT_BUTTON_LABEL: &str = "Solicitar Serviço";

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

impl ServiceItem {
    pub fn new<I, S>(title: impl Into<String>, description: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}

/// One card per service, each ending with a link to the contact page.
#[derive(Debug, Clone)]
pub struct ServicesSection {
    pub title: String,
    pub subtitle: String,
    pub services: Vec<ServiceItem>,
    pub button_label: String,
    pub class: String,
    pub background: Background,
}

impl Default for ServicesSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            services: Vec::new(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            class: String::new(),
            background: Background::White,
        }
    }
}

impl Section for ServicesSection {
    fn template(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn context(&self) -> Value {
        let background = self.background.tokens();

        context! {
            title => &self.title,
            subtitle => &self.subtitle,
            services => &self.services,
            button_label => &self.button_label,
            contact => Route::Contact.path(),
            class => &self.class,
            check => Value::from_safe_string(check_mark()),
            background => context! {
                section => background.section,
                panel => background.panel,
            },
        }
    }
}
