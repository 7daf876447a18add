//! "Sobre" page: who we are, what we value, why clients choose us.

use contabil_sections::icons;
use contabil_sections::{
    Background, Benefit, BenefitsSection, CtaSection, ProcessStep, ProcessSteps, Route,
};

use crate::blocks::{Hero, History};
use crate::page::{asset_url, Page};
use crate::site::SiteInfo;

pub const OFFICE_IMAGE: &str = "images/sobre-escritorio.jpg";
pub const TEAM_IMAGE: &str = "images/sobre-equipe.jpg";

pub const CTA_TITLE: &str = "Pronto para fazer parte da nossa história?";

pub fn page(site: &SiteInfo) -> Page {
    let hero = Hero {
        eyebrow: "Sobre Nós".to_string(),
        title: format!("Conheça a {}", site.name),
        subtitle: "Há mais de 15 anos ajudando empresas e profissionais a crescer com \
                   segurança, organização e tranquilidade fiscal."
            .to_string(),
        image: Some(asset_url(OFFICE_IMAGE)),
        ..Default::default()
    };

    let history = History {
        title: "Nossa História".to_string(),
        paragraphs: vec![
            format!(
                "A {} nasceu em Belo Horizonte com um propósito simples: oferecer uma \
                 contabilidade próxima, clara e descomplicada para quem empreende. Começamos \
                 atendendo pequenos comércios do bairro e, com o tempo, passamos a acompanhar \
                 empresas de diversos segmentos em todo o Brasil.",
                site.name
            ),
            "Hoje unimos a experiência de uma equipe especializada a ferramentas digitais que \
             tornam a rotina contábil mais ágil. Mas seguimos fiéis à nossa origem: cada cliente \
             é atendido de perto, com atenção às particularidades do seu negócio."
                .to_string(),
        ],
        image: asset_url(TEAM_IMAGE),
        image_alt: format!("Equipe da {}", site.name),
    };

    let values = BenefitsSection {
        title: "Nossos Valores".to_string(),
        subtitle: "Os princípios que orientam cada atendimento".to_string(),
        benefits: vec![
            Benefit::new(
                &icons::Shield,
                "Ética",
                "Atuamos com transparência e responsabilidade, sempre em conformidade com a \
                 legislação.",
            ),
            Benefit::new(
                &icons::Target,
                "Compromisso",
                "Cumprimos prazos e tratamos o resultado do seu negócio como se fosse o nosso.",
            ),
            Benefit::new(
                &icons::Heart,
                "Proximidade",
                "Atendimento humano e acessível, com respostas rápidas e linguagem sem \
                 complicação.",
            ),
        ],
        ..Default::default()
    };

    let differentiators = ProcessSteps {
        title: "Nossos Diferenciais".to_string(),
        subtitle: "O que nos torna a escolha certa para o seu negócio".to_string(),
        steps: vec![
            ProcessStep::new(
                "1",
                "Atendimento Personalizado",
                "Um contador dedicado que conhece a fundo a realidade da sua empresa.",
                &icons::UserCheck,
            ),
            ProcessStep::new(
                "2",
                "Tecnologia a Seu Favor",
                "Processos digitais, documentos na nuvem e relatórios sempre atualizados.",
                &icons::TrendingUp,
            ),
            ProcessStep::new(
                "3",
                "Equipe Especializada",
                "Profissionais qualificados e atentos às mudanças da legislação.",
                &icons::Award,
            ),
            ProcessStep::new(
                "4",
                "Pontualidade",
                "Obrigações entregues em dia para você nunca pagar multas desnecessárias.",
                &icons::Clock,
            ),
        ],
        background: Background::Background,
        ..Default::default()
    };

    let cta = CtaSection {
        title: CTA_TITLE.to_string(),
        description: "Converse com a nossa equipe e descubra como podemos simplificar a \
                      contabilidade da sua empresa."
            .to_string(),
        primary_label: "Fale Conosco".to_string(),
        secondary_label: "Chamar no WhatsApp".to_string(),
        secondary_link: site.whatsapp_url(),
        external_secondary: true,
        ..Default::default()
    };

    Page {
        route: Route::About,
        title: "Sobre Nós".to_string(),
        description: format!(
            "Conheça a história, os valores e os diferenciais da {}.",
            site.name
        ),
        sections: vec![
            Box::new(hero),
            Box::new(history),
            Box::new(values),
            Box::new(differentiators),
            Box::new(cta),
        ],
        assets: vec![OFFICE_IMAGE, TEAM_IMAGE],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::renderer;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        page(&SiteInfo::default())
            .render_body(&renderer().unwrap())
            .unwrap()
    }

    fn index_of(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle}"))
    }

    #[test]
    fn blocks_appear_in_order() {
        let html = render();

        let order = [
            index_of(&html, "hero-title"),
            index_of(&html, "history-section"),
            index_of(&html, "Nossos Valores"),
            index_of(&html, "Nossos Diferenciais"),
            index_of(&html, "cta-section"),
        ];

        let mut sorted = order;
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn history_has_two_paragraphs() {
        let html = render();

        assert_eq!(html.matches("history-paragraph").count(), 2);
        assert!(html.contains("A Exata Contabilidade nasceu em Belo Horizonte"));
    }

    #[test]
    fn three_value_cards() {
        let html = render();

        assert_eq!(html.matches("benefit-card").count(), 3);
        let titles = [
            index_of(&html, ">Ética</h3>"),
            index_of(&html, ">Compromisso</h3>"),
            index_of(&html, ">Proximidade</h3>"),
        ];
        assert!(titles[0] < titles[1] && titles[1] < titles[2]);
    }

    #[test]
    fn four_numbered_differentiators() {
        let html = render();

        assert_eq!(html.matches("step-card").count(), 4);
        let labels: Vec<usize> = ["1", "2", "3", "4"]
            .iter()
            .map(|n| index_of(&html, &format!(r#"<span class="step-label">{n}</span>"#)))
            .collect();
        assert!(labels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn closes_with_whatsapp_cta() {
        let html = render();

        assert!(html.contains(CTA_TITLE));
        assert!(html.contains(
            r#"<a href="https://wa.me/5531990726579" target="_blank" rel="noopener noreferrer""#
        ));
        assert!(index_of(&html, CTA_TITLE) > index_of(&html, "Nossos Diferenciais"));
    }

    #[test]
    fn references_both_images() {
        let about = page(&SiteInfo::default());
        let html = about.render_body(&renderer().unwrap()).unwrap();

        assert_eq!(about.assets.len(), 2);
        for asset in &about.assets {
            assert!(html.contains(&asset_url(asset)), "missing {asset}");
        }
    }
}
