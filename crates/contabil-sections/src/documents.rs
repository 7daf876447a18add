//! Checklist of documents a client must provide.

use minijinja::{context, Value};

use crate::icons::check_mark;
use crate::render::Section;
use crate::style::Background;

pub(crate) const TEMPLATE_NAME: &str = "documents.html";

pub(crate) const TEMPLATE: &str = r#"<section class="section documents-section {{ background.section }} {{ class }}">
  <div class="container">
    {% include "section-heading.html" %}
    <div class="documents-panel {{ background.panel }}">
      {% if documents %}
      <ul class="document-list grid grid-cols-1 md:grid-cols-2 gap-4">
        {% for document in documents %}
        <li class="document-item">{{ check }}<span>{{ document }}</span></li>
        {% endfor %}
      </ul>
      {% endif %}
      <div class="document-note">
        <strong class="document-note-title">Importante:</strong>
        <p>{{ note }}</p>
      </div>
    </div>
  </div>
</section>"#;

pub const DEFAULT_TITLE: &str = "Documentos Necessários";

/// Two-column checklist followed by a highlighted note.
///
/// Documents are shown in the given order, without deduplication.
#[derive(Debug, Clone)]
pub struct DocumentsRequired {
    pub title: String,
    pub subtitle: String,
    pub documents: Vec<String>,
    pub note: String,
    pub class: String,
    pub background: Background,
}

impl Default for DocumentsRequired {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: String::new(),
            documents: Vec::new(),
            note: String::new(),
            class: String::new(),
            background: Background::White,
        }
    }
}

impl Section for DocumentsRequired {
    fn template(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn context(&self) -> Value {
        let background = self.background.tokens();

        context! {
            title => &self.title,
            subtitle => &self.subtitle,
            documents => &self.documents,
            note => &self.note,
            class => &self.class,
            check => Value::from_safe_string(check_mark()),
            background => context! {
                section => background.section,
                panel => background.panel,
            },
        }
    }
}
