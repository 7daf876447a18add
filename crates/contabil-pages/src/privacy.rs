//! "Política de Privacidade" page.

use contabil_sections::icons;
use contabil_sections::{Benefit, BenefitsSection, CtaSection, CtaVariant, Route};

use crate::blocks::{Hero, PolicyArticle, PolicyClause};
use crate::page::Page;
use crate::site::SiteInfo;

const LAST_UPDATED: &str = "15 de janeiro de 2025";

pub fn page(site: &SiteInfo) -> Page {
    let hero = Hero {
        eyebrow: "Transparência".to_string(),
        title: "Política de Privacidade".to_string(),
        subtitle: "Saiba como coletamos, utilizamos e protegemos os seus dados pessoais, em \
                   conformidade com a Lei Geral de Proteção de Dados (LGPD)."
            .to_string(),
        ..Default::default()
    };

    let highlights = BenefitsSection {
        title: "Seus dados em boas mãos".to_string(),
        subtitle: "Compromissos que assumimos com você".to_string(),
        benefits: vec![
            Benefit::new(
                &icons::Lock,
                "Segurança",
                "Dados armazenados com controle de acesso e criptografia.",
            ),
            Benefit::new(
                &icons::Eye,
                "Transparência",
                "Você sabe quais dados coletamos e para que eles servem.",
            ),
            Benefit::new(
                &icons::UserCheck,
                "Controle",
                "Acesse, corrija ou peça a exclusão dos seus dados quando quiser.",
            ),
            Benefit::new(
                &icons::Shield,
                "Conformidade",
                "Tratamento de dados alinhado à Lei nº 13.709/2018 (LGPD).",
            ),
        ],
        ..Default::default()
    };

    let article = PolicyArticle {
        updated: LAST_UPDATED.to_string(),
        clauses: clauses(site),
    };

    let cta = CtaSection {
        title: "Ainda tem dúvidas sobre seus dados?".to_string(),
        description: "Nossa equipe está à disposição para esclarecer qualquer questão sobre \
                      privacidade."
            .to_string(),
        primary_label: "Fale Conosco".to_string(),
        secondary_label: "Enviar Mensagem".to_string(),
        secondary_link: Route::Contact.path().to_string(),
        external_secondary: false,
        variant: CtaVariant::Accent,
        ..Default::default()
    };

    Page {
        route: Route::PrivacyPolicy,
        title: "Política de Privacidade".to_string(),
        description: format!(
            "Como a {} coleta, utiliza e protege os seus dados pessoais.",
            site.name
        ),
        sections: vec![
            Box::new(hero),
            Box::new(highlights),
            Box::new(article),
            Box::new(cta),
        ],
        assets: Vec::new(),
    }
}

fn clauses(site: &SiteInfo) -> Vec<PolicyClause> {
    let intro = format!(
        "Esta política descreve como a {} trata os dados pessoais de clientes, visitantes \
         do site e demais pessoas que entram em contato conosco.",
        site.name
    );
    let contact = format!(
        "Para exercer seus direitos ou tirar dúvidas sobre esta política, escreva para {} \
         ou ligue para {}.",
        site.email, site.phone
    );

    vec![
        PolicyClause::new(
            "Informações Gerais",
            &[intro.as_str()],
            &[],
        ),
        PolicyClause::new(
            "Dados que Coletamos",
            &["Coletamos apenas os dados necessários para prestar nossos serviços, como:"],
            &[
                "Nome, CPF e documentos de identificação",
                "Telefone, e-mail e endereço",
                "Dados societários e fiscais da empresa",
                "Informações de navegação no site",
            ],
        ),
        PolicyClause::new(
            "Como Utilizamos seus Dados",
            &["Os dados são utilizados para:"],
            &[
                "Executar os serviços contábeis contratados",
                "Cumprir obrigações legais e fiscais",
                "Responder às suas solicitações de contato",
                "Melhorar a experiência de navegação no site",
            ],
        ),
        PolicyClause::new(
            "Compartilhamento de Dados",
            &["Compartilhamos dados somente com órgãos públicos, quando exigido por lei, e \
               com parceiros essenciais à prestação do serviço, sempre sob dever de \
               confidencialidade."],
            &[],
        ),
        PolicyClause::new(
            "Armazenamento e Segurança",
            &["Adotamos medidas técnicas e administrativas para proteger os dados contra \
               acessos não autorizados, perda ou alteração."],
            &[],
        ),
        PolicyClause::new(
            "Cookies",
            &["Utilizamos cookies para entender como o site é utilizado. Você pode \
               desativá-los nas configurações do seu navegador."],
            &[],
        ),
        PolicyClause::new(
            "Seus Direitos",
            &["Nos termos da LGPD, você pode a qualquer momento:"],
            &[
                "Confirmar a existência de tratamento dos seus dados",
                "Acessar e corrigir seus dados",
                "Solicitar a anonimização ou exclusão",
                "Revogar o consentimento",
            ],
        ),
        PolicyClause::new(
            "Retenção de Dados",
            &["Mantemos os dados pelo tempo necessário ao cumprimento das finalidades \
               descritas e dos prazos legais de guarda de documentos contábeis e fiscais."],
            &[],
        ),
        PolicyClause::new(
            "Alterações nesta Política",
            &["Esta política pode ser atualizada periodicamente. A data da última revisão \
               está indicada no início desta página."],
            &[],
        ),
        PolicyClause::new("Contato", &[contact.as_str()], &[]),
    ]
}
