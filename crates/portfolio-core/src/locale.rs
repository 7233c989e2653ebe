//! Two-locale text switch.
//!
//! Deliberately nothing more than a flat key -> markup table per language,
//! applied to `[data-lang]` nodes by the web glue. The chosen language is
//! persisted under [`STORAGE_KEY`] in durable client storage.

use fnv::FnvHashMap;
use std::sync::OnceLock;

/// localStorage key holding the visitor's language choice.
pub const STORAGE_KEY: &str = "preferred-lang";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Pt,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Pt,
            Lang::Pt => Lang::En,
        }
    }

    /// Language implied by a BCP 47 navigator tag ("pt-BR" -> Pt).
    pub fn from_navigator(language: &str) -> Lang {
        if language.starts_with("pt") {
            Lang::Pt
        } else {
            Lang::En
        }
    }

    /// Startup language: saved preference wins over the browser locale.
    pub fn initial(saved: Option<&str>, navigator_language: &str) -> Lang {
        saved
            .and_then(Lang::from_code)
            .unwrap_or_else(|| Lang::from_navigator(navigator_language))
    }

    /// CV download served in the matching language.
    pub fn cv_path(self) -> &'static str {
        match self {
            Lang::En => "assets/cv/EnzoEsmeraldo_CV_EN.pdf",
            Lang::Pt => "assets/cv/EnzoEsmeraldo_CV_PT.pdf",
        }
    }
}

/// Translated markup for `key`, or `None` for unknown keys (the node keeps
/// whatever text the markup shipped with).
pub fn translate(lang: Lang, key: &str) -> Option<&'static str> {
    table(lang).get(key).copied()
}

/// Labels for the journey expand/collapse button.
pub fn read_more_label(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Read More",
        Lang::Pt => "Ler Mais",
    }
}

pub fn read_less_label(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Show Less",
        Lang::Pt => "Ler Menos",
    }
}

fn table(lang: Lang) -> &'static FnvHashMap<&'static str, &'static str> {
    static EN: OnceLock<FnvHashMap<&'static str, &'static str>> = OnceLock::new();
    static PT: OnceLock<FnvHashMap<&'static str, &'static str>> = OnceLock::new();
    match lang {
        Lang::En => EN.get_or_init(|| EN_ENTRIES.iter().copied().collect()),
        Lang::Pt => PT.get_or_init(|| PT_ENTRIES.iter().copied().collect()),
    }
}

/// Raw table entries for one locale, in declaration order. Tests use this
/// to check key parity between the two tables.
pub fn entries(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN_ENTRIES,
        Lang::Pt => PT_ENTRIES,
    }
}

const EN_ENTRIES: &[(&str, &str)] = &[
    ("nav.projects", "Projects"),
    ("nav.journey", "Journey"),
    ("nav.about", "About"),
    ("nav.contact", "Contact"),
    ("hero.available", "Available for Work"),
    ("hero.location", "Brazil / Fortaleza, Ceará"),
    (
        "hero.description",
        "Full Stack Developer mastering <span class=\"text-neon font-medium\">Angular + Spring Boot</span>. Crafting scalable systems and <span class=\"text-sakura font-medium\">aesthetic interfaces</span> where code meets creativity.",
    ),
    ("hero.viewProjects", "PROJECTS"),
    ("hero.resume", "RESUME"),
    ("hero.scroll", "Scroll to Explore"),
    ("projects.title", "Selected"),
    ("projects.works", "Works"),
    (
        "projects.description",
        "A collection of digital experiences, applications, and experiments crafted with precision and passion.",
    ),
    ("projects.wantToSee", "Want to see"),
    ("projects.more", "More?"),
    ("projects.visitGithub", "VISIT MY GITHUB :3"),
    ("journey.subtitle", "Career Path"),
    ("journey.title", "Journey"),
    ("journey.role1", "FullStack Developer"),
    ("journey.date1", "Jan. 2025 - Present"),
    ("journey.status1", "Current Position | Angular + Spring"),
    (
        "journey.desc1",
        "Advanced to full developer role, taking on greater responsibilities in system architecture and leadership.",
    ),
    ("journey.readMore", "Read More"),
    ("journey.achievements", "Key Achievements"),
    (
        "journey.role1.item1",
        "Developed the Exitus system end-to-end, working on front-end, back-end, and databases, focusing on scalability and performance",
    ),
    (
        "journey.role1.item2",
        "Designed the system's visual identity and created user interfaces, ensuring consistency in the user experience (UI/UX)",
    ),
    (
        "journey.role1.item3",
        "Architected and implemented the front-end using Angular and TypeScript, applying best practices for componentization and responsiveness",
    ),
    (
        "journey.role1.item4",
        "Assisted in defining and building the back-end architecture with Spring Boot, including database integrations and external services",
    ),
    (
        "journey.role1.item5",
        "Implemented integrations with AI services, automating question validation and improving the educational experience",
    ),
    (
        "journey.role1.item6",
        "Integrated webhooks and deployed cloud-based solutions (Source Cloud) for continuous system deployment and maintenance",
    ),
    (
        "journey.role1.item7",
        "Worked under Agile Scrum methodology, actively participating in planning, reviews, and retrospectives",
    ),
    ("journey.role2", "FullStack Intern"),
    ("journey.date2", "Apr. 2024 - Dec. 2024"),
    ("journey.status2", "Completed | Angular + Spring"),
    (
        "journey.desc2",
        "Started my professional journey as an intern, contributing to system development and learning industry best practices.",
    ),
    (
        "journey.role2.item1",
        "Contributed to the development and improvement of Exitus system interfaces, focusing on usability and accessibility",
    ),
    (
        "journey.role2.item2",
        "Assisted in creating user flows and interface design, collaborating closely with the UI/UX team",
    ),
    (
        "journey.role2.item3",
        "Participated in front-end development using Angular, TypeScript, and CSS, and supported the back-end with Spring Boot",
    ),
    (
        "journey.role2.item4",
        "Gained hands-on experience with full-stack development in a professional environment",
    ),
    (
        "journey.role2.item5",
        "Learned Agile development methodologies and team collaboration practices",
    ),
    ("about.offCode", "OFF CODE"),
    ("about.title1", "Just Keep"),
    ("about.title2", "Swimming"),
    (
        "about.description",
        "Beyond the code, I have a deep fascination with <span class=\"text-white font-medium\">Sharks</span> & <span class=\"text-white font-medium\">Pokémon</span>. Just like in development, I believe in constant evolution and adapting to the environment to survive and thrive.",
    ),
    ("about.stat1.label", "Favorite Era"),
    ("about.stat1.value", "Gen 4 - Sinnoh"),
    ("about.stat2.label", "Spirit Animal"),
    ("about.stat2.value", "Hammerhead Shark"),
    ("about.stat3.label", "Main Framework"),
    ("about.stat3.value", "Angular and React"),
    ("about.stat4.label", "Graduation"),
    ("about.stat4.value", "2026.2"),
    ("about.downloadCV", "DOWNLOAD CV"),
    ("footer.title1", "Did you like it?"),
    ("footer.title2", "Let's"),
    ("footer.connect", "Connect"),
    ("footer.copyright", "&copy; 2025 Enzo Esmeraldo. All rights reserved."),
    (
        "footer.credits",
        "Designed & Built with <i class=\"fas fa-heart text-sakura animate-pulse\"></i> in Brazil",
    ),
    ("music.hint", "Change song to switch theme"),
];

const PT_ENTRIES: &[(&str, &str)] = &[
    ("nav.projects", "Projetos"),
    ("nav.journey", "Jornada"),
    ("nav.about", "Sobre"),
    ("nav.contact", "Contato"),
    ("hero.available", "Disponível para Trabalho"),
    ("hero.location", "Brasil / Fortaleza, Ceará"),
    (
        "hero.description",
        "Desenvolvedor Full Stack dominando <span class=\"text-neon font-medium\">Angular + Spring Boot</span>. Criando sistemas escaláveis e <span class=\"text-sakura font-medium\">interfaces estéticas</span> onde código encontra criatividade.",
    ),
    ("hero.viewProjects", "PROJETOS"),
    ("hero.resume", "CURRÍCULO"),
    ("hero.scroll", "Role para Explorar"),
    ("projects.title", "Trabalhos"),
    ("projects.works", "Selecionados"),
    (
        "projects.description",
        "Uma coleção de experiências digitais, aplicações e experimentos criados com precisão e paixão.",
    ),
    ("projects.wantToSee", "Quer ver"),
    ("projects.more", "Mais?"),
    ("projects.visitGithub", "VISITE O GITHUB"),
    ("journey.subtitle", "Trajetória Profissional"),
    ("journey.title", "Jornada"),
    ("journey.role1", "Desenvolvedor FullStack"),
    ("journey.date1", "Jan. 2025 - Presente"),
    ("journey.status1", "Cargo Atual | Angular + Spring"),
    (
        "journey.desc1",
        "Avancei para o cargo de desenvolvedor pleno, assumindo maiores responsabilidades na arquitetura do sistema e liderança.",
    ),
    ("journey.readMore", "Ler Mais"),
    ("journey.achievements", "Principais Conquistas"),
    (
        "journey.role1.item1",
        "Desenvolvi o sistema Exitus de ponta a ponta, trabalhando no front-end, back-end e bancos de dados, focando em escalabilidade e desempenho",
    ),
    (
        "journey.role1.item2",
        "Projetei a identidade visual do sistema e criei interfaces de usuário, garantindo consistência na experiência do usuário (UI/UX)",
    ),
    (
        "journey.role1.item3",
        "Arquitetei e implementei o front-end usando Angular e TypeScript, aplicando melhores práticas de componentização e responsividade",
    ),
    (
        "journey.role1.item4",
        "Auxiliei na definição e construção da arquitetura back-end com Spring Boot, incluindo integrações de banco de dados e serviços externos",
    ),
    (
        "journey.role1.item5",
        "Implementei integrações com serviços de IA, automatizando a validação de questões e melhorando a experiência educacional",
    ),
    (
        "journey.role1.item6",
        "Integrei webhooks e implantei soluções baseadas em nuvem (Source Cloud) para implantação e manutenção contínua do sistema",
    ),
    (
        "journey.role1.item7",
        "Trabalhei sob a metodologia Agile Scrum, participando ativamente de planejamentos, revisões e retrospectivas",
    ),
    ("journey.role2", "Estagiário FullStack"),
    ("journey.date2", "Abr. 2024 - Dez. 2024"),
    ("journey.status2", "Concluído | Angular + Spring"),
    (
        "journey.desc2",
        "Iniciei minha jornada profissional como estagiário, contribuindo para o desenvolvimento de sistemas e aprendendo as melhores práticas da indústria.",
    ),
    (
        "journey.role2.item1",
        "Contribuí para o desenvolvimento e melhoria das interfaces do sistema Exitus, focando em usabilidade e acessibilidade",
    ),
    (
        "journey.role2.item2",
        "Auxiliei na criação de fluxos de usuário e design de interface, colaborando estreitamente com a equipe de UI/UX",
    ),
    (
        "journey.role2.item3",
        "Participei do desenvolvimento front-end usando Angular, TypeScript e CSS, e apoiei o back-end com Spring Boot",
    ),
    (
        "journey.role2.item4",
        "Ganhei experiência prática com desenvolvimento full-stack em um ambiente profissional",
    ),
    (
        "journey.role2.item5",
        "Aprendi metodologias de desenvolvimento Ágil e práticas de colaboração em equipe",
    ),
    ("about.offCode", "OFF CODE"),
    ("about.title1", "Continue a"),
    ("about.title2", "Nadar"),
    (
        "about.description",
        "Além do código, tenho um fascínio profundo por <span class=\"text-white font-medium\">Tubarões</span> & <span class=\"text-white font-medium\">Pokémon</span>. Assim como no desenvolvimento, acredito na evolução constante e adaptação ao ambiente para sobreviver e prosperar.",
    ),
    ("about.stat1.label", "Era Favorita"),
    ("about.stat1.value", "Gen 4 - Sinnoh"),
    ("about.stat2.label", "Espírito Animal"),
    ("about.stat2.value", "Tubarão Martelo"),
    ("about.stat3.label", "Framework Principal"),
    ("about.stat3.value", "Angular e React"),
    ("about.stat4.label", "Graduação"),
    ("about.stat4.value", "2026.2"),
    ("about.downloadCV", "BAIXAR CV"),
    ("footer.title1", "Gostou?"),
    ("footer.title2", "Vamos nos"),
    ("footer.connect", "Conectar"),
    ("footer.copyright", "&copy; 2025 Enzo Esmeraldo. Todos os direitos reservados."),
    (
        "footer.credits",
        "Projetado & Construído com <i class=\"fas fa-heart text-sakura animate-pulse\"></i> no Brasil",
    ),
    ("music.hint", "Mude a música para trocar o tema"),
];
