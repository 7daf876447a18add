//! Layout templates wrapping every rendered page.

use contabil_sections::render::url_attr;
use minijinja::{context, Environment};

/// A navigation item.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Whether this is the current page
    pub active: bool,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Meta description
    pub description: String,
    /// Document language
    pub lang: String,
    /// Rendered sections HTML
    pub content: String,
    /// Navigation items
    pub nav: Vec<NavItem>,
    /// Footer contact links
    pub contact: ContactLinks,
    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

/// Contact details shown in the footer.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactLinks {
    pub whatsapp_url: String,
    pub mailto: String,
    pub email: String,
    pub phone: String,
    pub privacy_path: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the layout templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_filter("url", url_attr);

        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("header.html", HEADER_TEMPLATE)?;
        env.add_template("footer.html", FOOTER_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;
        env.add_template("404.html", NOT_FOUND_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            site_title => &context.site_title,
            description => &context.description,
            lang => &context.lang,
            content => &context.content,
            nav => &context.nav,
            contact => &context.contact,
            styles => &context.styles,
        })
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} | {{ site_title }}</title>
  <meta name="description" content="{{ description }}">
  <link rel="stylesheet" href="{{ "/assets/main.css"|url }}">
  {% for style in styles %}<link rel="stylesheet" href="{{ style|url }}">
  {% endfor %}
</head>
<body>
  {% include "header.html" %}
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  {% include "footer.html" %}
  <script src="{{ "/assets/main.js"|url }}"></script>
</body>
</html>"##;

const HEADER_TEMPLATE: &str = r##"<header class="site-header">
  <div class="container header-inner">
    <a href="{{ "/"|url }}" class="brand">{{ site_title }}</a>
    <button type="button" class="menu-btn" aria-label="Abrir menu" aria-expanded="false">&#9776;</button>
    <nav class="site-nav">
      <ul class="nav-list">
      {% for item in nav %}
        <li class="nav-item{% if item.active %} active{% endif %}">
          <a href="{{ item.path|url }}"{% if item.active %} aria-current="page"{% endif %}>{{ item.title }}</a>
        </li>
      {% endfor %}
      </ul>
    </nav>
  </div>
</header>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="site-footer">
  <div class="container footer-inner">
    <div class="footer-brand">
      <strong>{{ site_title }}</strong>
      <p>Contabilidade para empresas e profissionais.</p>
    </div>
    <ul class="footer-contact">
      <li><a href="{{ contact.whatsapp_url|url }}" target="_blank" rel="noopener noreferrer">WhatsApp {{ contact.phone }}</a></li>
      <li><a href="{{ contact.mailto|url }}">{{ contact.email }}</a></li>
    </ul>
    <p class="footer-legal">
      <a href="{{ contact.privacy_path|url }}">Política de Privacidade</a>
      <span>&copy; {{ site_title }}. Todos os direitos reservados.</span>
    </p>
  </div>
</footer>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{{ content | safe }}
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="section not-found bg-background">
  <div class="container text-center">
    <h1 class="section-title">Página não encontrada</h1>
    <p class="section-subtitle">O endereço acessado não existe ou foi alterado.</p>
    <a href="{{ "/"|url }}" class="btn btn-primary">Voltar ao início</a>
  </div>
</section>
{% endblock %}"##;
