//! "Serviços" page: catalogue, company opening steps and checklist.

use contabil_sections::icons;
use contabil_sections::{
    Background, Columns, CtaSection, DocumentsRequired, ProcessStep, ProcessSteps, Route,
    ServiceItem, ServicesSection,
};

use crate::blocks::Hero;
use crate::page::Page;
use crate::site::SiteInfo;

pub fn page(site: &SiteInfo) -> Page {
    let hero = Hero {
        eyebrow: "Serviços".to_string(),
        title: "Soluções contábeis para cada fase do seu negócio".to_string(),
        subtitle: "Da abertura da empresa ao planejamento tributário, cuidamos da burocracia \
                   para você focar no que importa."
            .to_string(),
        ..Default::default()
    };

    let catalogue = ServicesSection {
        title: "Nossos Serviços".to_string(),
        subtitle: "Atendimento completo para empresas e profissionais autônomos".to_string(),
        services: vec![
            ServiceItem::new(
                "Abertura de Empresas",
                "Tiramos seu CNPJ do papel com segurança e no menor prazo possível.",
                [
                    "Escolha do tipo societário",
                    "Registro na Junta Comercial",
                    "Inscrições municipal e estadual",
                    "Alvarás e licenças",
                ],
            ),
            ServiceItem::new(
                "Contabilidade Empresarial",
                "Escrituração completa e relatórios que ajudam na tomada de decisão.",
                [
                    "Escrituração contábil",
                    "Balanços e demonstrativos",
                    "Relatórios gerenciais",
                ],
            ),
            ServiceItem::new(
                "Departamento Fiscal",
                "Apuração correta de tributos e entrega das obrigações em dia.",
                [
                    "Apuração de impostos",
                    "Emissão de guias",
                    "Obrigações acessórias",
                ],
            ),
            ServiceItem::new(
                "Departamento Pessoal",
                "Rotinas trabalhistas sem complicação para a sua equipe.",
                [
                    "Folha de pagamento",
                    "Admissões e rescisões",
                    "eSocial e FGTS",
                ],
            ),
            ServiceItem::new(
                "Imposto de Renda",
                "Declaração de pessoa física feita por quem entende do assunto.",
                [
                    "Declaração anual",
                    "Ganho de capital",
                    "Carnê-leão",
                ],
            ),
            ServiceItem::new(
                "Consultoria Tributária",
                "Análise do seu enquadramento para pagar apenas o que é devido.",
                [
                    "Planejamento tributário",
                    "Revisão de enquadramento",
                    "Recuperação de créditos",
                ],
            ),
        ],
        ..Default::default()
    };

    let opening = ProcessSteps {
        title: "Como Abrir sua Empresa".to_string(),
        subtitle: "Um processo simples, acompanhado do início ao fim".to_string(),
        steps: vec![
            ProcessStep::new(
                "01",
                "Conversa Inicial",
                "Entendemos o seu projeto e tiramos todas as dúvidas.",
                &icons::MessageCircle,
            ),
            ProcessStep::new(
                "02",
                "Planejamento",
                "Definimos o tipo de empresa e o regime tributário ideal.",
                &icons::Calculator,
            ),
            ProcessStep::new(
                "03",
                "Documentação",
                "Reunimos e conferimos toda a documentação necessária.",
                &icons::FileText,
            ),
            ProcessStep::new(
                "04",
                "Registro",
                "Cuidamos do registro nos órgãos competentes.",
                &icons::Building,
            ),
            ProcessStep::new(
                "05",
                "Empresa Ativa",
                "CNPJ liberado e sua empresa pronta para faturar.",
                &icons::Briefcase,
            ),
        ],
        background: Background::Background,
        columns: Columns::Five,
        ..Default::default()
    };

    let documents = DocumentsRequired {
        subtitle: "Para abrir sua empresa, tenha em mãos".to_string(),
        documents: [
            "RG e CPF dos sócios",
            "Comprovante de endereço dos sócios",
            "Certidão de casamento, se houver",
            "Título de eleitor",
            "Recibo da última declaração de IR",
            "Endereço completo do estabelecimento",
            "IPTU do imóvel comercial",
            "Descrição das atividades da empresa",
        ]
        .iter()
        .map(|d| d.to_string())
        .collect(),
        note: "A lista pode variar conforme o tipo de empresa e o município. Nossa equipe \
               confirma tudo com você antes de iniciar o processo."
            .to_string(),
        background: Background::Background,
        ..Default::default()
    };

    let cta = CtaSection {
        title: "Vamos cuidar da sua contabilidade?".to_string(),
        description: "Peça um orçamento sem compromisso e receba uma proposta sob medida."
            .to_string(),
        primary_label: "Solicitar Orçamento".to_string(),
        secondary_label: "Chamar no WhatsApp".to_string(),
        secondary_link: site.whatsapp_url(),
        ..Default::default()
    };

    Page {
        route: Route::Services,
        title: "Serviços".to_string(),
        description: format!(
            "Abertura de empresas, contabilidade, fiscal, pessoal e consultoria com a {}.",
            site.name
        ),
        sections: vec![
            Box::new(hero),
            Box::new(catalogue),
            Box::new(opening),
            Box::new(documents),
            Box::new(cta),
        ],
        assets: Vec::new(),
    }
}
