//! Closing call-to-action banner.

use minijinja::{context, Value};

use crate::render::Section;
use crate::route::Route;
use crate::style::CtaVariant;

pub(crate) const TEMPLATE_NAME: &str = "cta.html";

pub(crate) const TEMPLATE: &str = r#"<section class="section cta-section {{ tokens.section }} {{ class }}">
  <div class="container text-center">
    <h2 class="cta-title">{{ title }}</h2>
    {% with divider_class = "my-6", divider_bar = tokens.divider_bar, divider_dot = tokens.divider_dot %}{% include "divider.html" %}{% endwith %}
    <p class="cta-text">{{ description }}</p>
    <div class="cta-actions">
      <a href="{{ contact|url }}" class="{{ tokens.primary }}">{{ primary_label }}</a>
      {% if external_secondary %}
      <a href="{{ secondary_link|url }}" target="_blank" rel="noopener noreferrer" class="{{ tokens.secondary }}">{{ secondary_label }}</a>
      {% else %}
      <a href="{{ secondary_link|url }}" data-link="internal" class="{{ tokens.secondary }}">{{ secondary_label }}</a>
      {% endif %}
    </div>
  </div>
</section>"#;

/// Banner with a contact button and a secondary link.
///
/// The primary button always leads to [`Route::Contact`]. The secondary link
/// opens in a new browsing context when `external_secondary` is set and is
/// an internal link otherwise; the target string itself is never inspected.
#[derive(Debug, Clone)]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub primary_label: String,
    pub secondary_label: String,
    pub secondary_link: String,
    pub external_secondary: bool,
    pub class: String,
    pub variant: CtaVariant,
}

impl Default for CtaSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            primary_label: String::new(),
            secondary_label: String::new(),
            secondary_link: String::new(),
            external_secondary: true,
            class: String::new(),
            variant: CtaVariant::Default,
        }
    }
}

impl Section for CtaSection {
    fn template(&self) -> &'static str {
        TEMPLATE_NAME
    }

    fn context(&self) -> Value {
        let tokens = self.variant.tokens();

        context! {
            title => &self.title,
            description => &self.description,
            primary_label => &self.primary_label,
            secondary_label => &self.secondary_label,
            secondary_link => &self.secondary_link,
            external_secondary => self.external_secondary,
            contact => Route::Contact.path(),
            class => &self.class,
            tokens => context! {
                section => tokens.section,
                primary => tokens.primary_button,
                secondary => tokens.secondary_button,
                divider_bar => tokens.divider_bar,
                divider_dot => tokens.divider_dot,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{positions, renderer};

    const WHATSAPP: &str = "https://wa.me/5531990726579";

    fn cta(link: &str, external: bool) -> CtaSection {
        CtaSection {
            title: "Vamos conversar?".to_string(),
            description: "Fale com um contador.".to_string(),
            primary_label: "Fale Conosco".to_string(),
            secondary_label: "WhatsApp".to_string(),
            secondary_link: link.to_string(),
            external_secondary: external,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_external_secondary() {
        let section = CtaSection::default();

        assert!(section.external_secondary);
        assert_eq!(section.variant, CtaVariant::Default);
    }

    #[test]
    fn external_secondary_opens_new_context() {
        let html = renderer().render(&cta(WHATSAPP, true)).unwrap();

        assert!(html.contains(&format!(
            r#"<a href="{WHATSAPP}" target="_blank" rel="noopener noreferrer""#
        )));
        assert!(!html.contains(r#"data-link="internal""#));
        assert!(html.contains(">WhatsApp</a>"));
    }

    #[test]
    fn internal_secondary_is_a_route_link() {
        let html = renderer().render(&cta("/contato", false)).unwrap();

        assert!(html.contains(r#"<a href="/contato" data-link="internal""#));
        assert!(!html.contains("target=\"_blank\""));
        assert!(html.contains(">WhatsApp</a>"));
    }

    #[test]
    fn flag_decides_link_semantics() {
        let internal_url = renderer().render(&cta(WHATSAPP, false)).unwrap();
        let external_path = renderer().render(&cta("/contato", true)).unwrap();

        assert!(internal_url.contains(&format!(r#"<a href="{WHATSAPP}" data-link="internal""#)));
        assert!(external_path.contains(r#"<a href="/contato" target="_blank""#));
    }

    #[test]
    fn primary_button_goes_to_contact() {
        let html = renderer().render(&cta(WHATSAPP, true)).unwrap();

        assert!(html.contains(r#"<a href="/contato" class="btn btn-accent">Fale Conosco</a>"#));
    }

    #[test]
    fn variants_use_distinct_treatments() {
        let default = renderer().render(&cta(WHATSAPP, true)).unwrap();
        let accent = renderer()
            .render(&CtaSection {
                variant: CtaVariant::Accent,
                ..cta(WHATSAPP, true)
            })
            .unwrap();

        assert!(default.contains("bg-primary text-on-primary"));
        assert!(default.contains(r#"class="btn btn-outline-light""#));
        assert!(!default.contains("bg-accent text-on-accent"));

        assert!(accent.contains("bg-accent text-on-accent"));
        assert!(accent.contains(r#"class="btn btn-primary""#));
        assert!(accent.contains(r#"class="btn btn-outline-dark""#));
        assert!(!accent.contains("bg-primary text-on-primary"));
    }

    #[test]
    fn divider_sits_between_title_and_text() {
        let html = renderer().render(&cta(WHATSAPP, true)).unwrap();

        let order = positions(&html, &["cta-title", "section-divider", "cta-text"]);
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn divider_contrasts_with_banner_in_both_variants() {
        for variant in [CtaVariant::Default, CtaVariant::Accent] {
            let html = renderer()
                .render(&CtaSection {
                    variant,
                    ..cta(WHATSAPP, true)
                })
                .unwrap();
            let tokens = variant.tokens();

            assert_eq!(html.matches("section-divider").count(), 1);
            assert!(html.contains(&format!(r#"class="divider-bar {}""#, tokens.divider_bar)));
            assert!(!tokens.section.contains(tokens.divider_bar));
            assert!(!tokens.section.contains(tokens.divider_dot));
        }
    }
}
