//! Page-local blocks that are not part of the reusable section library.

use contabil_sections::{RenderError, Section, SectionRenderer};
use minijinja::{context, Value};
use serde::Serialize;

const HERO_TEMPLATE: &str = r#"<section class="hero bg-primary text-on-primary {{ class }}">
  {% if image %}<img src="{{ image|url }}" alt="" class="hero-image" aria-hidden="true">{% endif %}
  <div class="container text-center hero-content">
    {% if eyebrow %}<span class="hero-eyebrow">{{ eyebrow }}</span>{% endif %}
    <h1 class="hero-title">{{ title }}</h1>
    {% with divider_class = "my-6" %}{% include "divider.html" %}{% endwith %}
    <p class="hero-subtitle">{{ subtitle }}</p>
  </div>
</section>"#;

const HISTORY_TEMPLATE: &str = r#"<section class="section history-section bg-white">
  <div class="container grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
    <div class="history-text">
      <h2 class="section-title">{{ title }}</h2>
      {% with divider_class = "my-6 justify-start" %}{% include "divider.html" %}{% endwith %}
      {% for paragraph in paragraphs %}
      <p class="history-paragraph">{{ paragraph }}</p>
      {% endfor %}
    </div>
    <figure class="history-figure">
      <img src="{{ image|url }}" alt="{{ image_alt }}" loading="lazy" class="rounded-image">
    </figure>
  </div>
</section>"#;

const POLICY_TEMPLATE: &str = r#"<section class="section policy-section bg-white">
  <div class="container policy-container">
    <p class="policy-updated">Última atualização: {{ updated }}</p>
    {% for clause in clauses %}
    <article class="policy-clause" id="clausula-{{ loop.index }}">
      <h2 class="policy-clause-title">{{ loop.index }}. {{ clause.title }}</h2>
      {% for paragraph in clause.paragraphs %}
      <p>{{ paragraph }}</p>
      {% endfor %}
      {% if clause.items %}
      <ul class="policy-items">
        {% for item in clause.items %}
        <li>{{ item }}</li>
        {% endfor %}
      </ul>
      {% endif %}
    </article>
    {% endfor %}
  </div>
</section>"#;

/// Register the block templates on a section renderer.
pub fn register_templates(renderer: &mut SectionRenderer) -> Result<(), RenderError> {
    renderer.add_template("hero.html", HERO_TEMPLATE)?;
    renderer.add_template("history.html", HISTORY_TEMPLATE)?;
    renderer.add_template("policy.html", POLICY_TEMPLATE)?;
    Ok(())
}

/// Opening banner of a page.
#[derive(Debug, Clone, Default)]
pub struct Hero {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    /// Decorative background image URL.
    pub image: Option<String>,
    pub class: String,
}

impl Section for Hero {
    fn template(&self) -> &'static str {
        "hero.html"
    }

    fn context(&self) -> Value {
        context! {
            eyebrow => &self.eyebrow,
            title => &self.title,
            subtitle => &self.subtitle,
            image => &self.image,
            class => &self.class,
        }
    }
}

/// Text column beside a picture.
#[derive(Debug, Clone, Default)]
pub struct History {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    pub image_alt: String,
}

impl Section for History {
    fn template(&self) -> &'static str {
        "history.html"
    }

    fn context(&self) -> Value {
        context! {
            title => &self.title,
            paragraphs => &self.paragraphs,
            image => &self.image,
            image_alt => &self.image_alt,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicyClause {
    pub title: String,
    pub paragraphs: Vec<String>,
    /// Bullet list shown after the paragraphs.
    pub items: Vec<String>,
}

impl PolicyClause {
    pub fn new(title: &str, paragraphs: &[&str], items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// Numbered legal clauses. Numbering follows list order.
#[derive(Debug, Clone, Default)]
pub struct PolicyArticle {
    pub updated: String,
    pub clauses: Vec<PolicyClause>,
}

impl Section for PolicyArticle {
    fn template(&self) -> &'static str {
        "policy.html"
    }

    fn context(&self) -> Value {
        context! {
            updated => &self.updated,
            clauses => &self.clauses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::renderer;

    #[test]
    fn hero_renders_heading_and_divider() {
        let hero = Hero {
            eyebrow: "Sobre".to_string(),
            title: "Quem somos".to_string(),
            subtitle: "Contabilidade próxima".to_string(),
            ..Default::default()
        };
        let html = renderer().unwrap().render(&hero).unwrap();

        assert!(html.contains(r#"<h1 class="hero-title">Quem somos</h1>"#));
        assert!(html.contains("section-divider"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn hero_image_is_optional() {
        let hero = Hero {
            title: "Quem somos".to_string(),
            image: Some("/assets/images/fachada.jpg".to_string()),
            ..Default::default()
        };
        let html = renderer().unwrap().render(&hero).unwrap();

        assert!(html.contains(r#"<img src="/assets/images/fachada.jpg""#));
        assert!(!html.contains("hero-eyebrow"));
    }

    #[test]
    fn history_renders_every_paragraph() {
        let history = History {
            title: "Nossa História".to_string(),
            paragraphs: vec!["Primeiro.".to_string(), "Segundo.".to_string()],
            image: "/assets/images/equipe.jpg".to_string(),
            image_alt: "Equipe".to_string(),
        };
        let html = renderer().unwrap().render(&history).unwrap();

        assert_eq!(html.matches("history-paragraph").count(), 2);
        assert!(html.contains(r#"src="/assets/images/equipe.jpg" alt="Equipe""#));
    }

    #[test]
    fn policy_clauses_are_numbered_in_order() {
        let article = PolicyArticle {
            updated: "1 de março de 2025".to_string(),
            clauses: vec![
                PolicyClause::new("Coleta", &["Texto."], &[]),
                PolicyClause::new("Uso", &["Texto."], &["Item um", "Item dois"]),
            ],
        };
        let html = renderer().unwrap().render(&article).unwrap();

        let first = html.find("1. Coleta").unwrap();
        let second = html.find("2. Uso").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("policy-items").count(), 1);
        assert!(html.contains(r#"id="clausula-2""#));
    }
}
