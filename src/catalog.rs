use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Application,
    SiteWeb,
    Bot,
    ExtensionChrome,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Application,
        Category::SiteWeb,
        Category::Bot,
        Category::ExtensionChrome,
    ];

    /// Label shown on project cards.
    pub fn label(self) -> &'static str {
        match self {
            Category::Application => "Application",
            Category::SiteWeb => "Site Web",
            Category::Bot => "Bot",
            Category::ExtensionChrome => "Extension Chrome",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Repository,
    StoreListing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub url: &'static str,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetails {
    pub subtitle: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    /// Long-form description, written as Markdown.
    pub description: &'static str,
    pub link: Option<ExternalLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: Category,
    pub slug: Option<&'static str>,
    pub details: Option<ProjectDetails>,
}

impl Project {
    pub fn thumbnail(&self) -> &'static str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }

    /// Route of the detail page, `None` when the card is not navigable.
    pub fn href(&self) -> Option<String> {
        self.slug.map(|slug| format!("/projects/{slug}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub role: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
    Database,
    Settings,
    Zap,
    Languages,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Code => "</>",
            SkillIcon::Server => "🖥️",
            SkillIcon::Database => "🗄️",
            SkillIcon::Settings => "⚙️",
            SkillIcon::Zap => "⚡",
            SkillIcon::Languages => "🌐",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            SkillIcon::Code => "text-blue-500",
            SkillIcon::Server => "text-green-500",
            SkillIcon::Database => "text-purple-500",
            SkillIcon::Settings => "text-red-500",
            SkillIcon::Zap => "text-yellow-500",
            SkillIcon::Languages => "text-pink-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub icon: SkillIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A diploma or certification line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    pub title: &'static str,
    pub detail: Option<&'static str>,
    pub period: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no project with slug `{0}`")]
    UnknownSlug(String),
    #[error("slug `{0}` is used by more than one project")]
    DuplicateSlug(String),
    #[error("slug `{0}` is not a valid path segment")]
    InvalidSlug(String),
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub projects: &'a [Project],
    pub experiences: &'a [Experience],
    pub skills: &'a [Skill],
    pub diplomas: &'a [Credential],
    pub certifications: &'a [Credential],
}

impl<'a> Catalog<'a> {
    pub fn project_by_slug(&self, slug: &str) -> Option<&'a Project> {
        let projects = self.projects;
        projects.iter().find(|p| p.slug == Some(slug))
    }

    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + 'a {
        let projects = self.projects;
        projects.iter().filter_map(|p| p.slug)
    }

    /// Checks that every slug is a unique, URL-safe path segment.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for slug in self.slugs() {
            let valid = !slug.is_empty()
                && slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
            if !valid {
                return Err(CatalogError::InvalidSlug(slug.to_string()));
            }
            if !seen.insert(slug) {
                return Err(CatalogError::DuplicateSlug(slug.to_string()));
            }
        }
        Ok(())
    }
}

pub static CATALOG: Catalog<'static> = Catalog {
    projects: PROJECTS,
    experiences: EXPERIENCES,
    skills: SKILLS,
    diplomas: DIPLOMAS,
    certifications: CERTIFICATIONS,
};

const PROJECTS: &[Project] = &[
    Project {
        title: "HSP - Plateforme de Services de Santé",
        description: "Une plateforme innovante connectant hôpitaux et professionnels de santé avec des fonctionnalités en temps réel.",
        image: "/icons/hsp.png",
        category: Category::SiteWeb,
        slug: Some("hsp-plateforme-sante"),
        details: Some(ProjectDetails {
            subtitle: "Connecter les professionnels de santé pour des soins optimaux",
            features: &[
                "Messagerie en temps réel",
                "Système d'actualités et d'annonces",
                "Gestion des offres d'emploi",
                "Authentification sécurisée avec 2FA",
            ],
            technologies: &[
                "Laravel (Backend PHP)",
                "JetStream (Authentification)",
                "Livewire (Interactions temps réel)",
                "Tailwind CSS (Design responsive)",
            ],
            description: "Notre plateforme intègre un système de messagerie en temps réel optimisé et sécurisé, avec un focus particulier sur la protection des données médicales sensibles. Nous utilisons des technologies de pointe pour garantir la confidentialité et l'intégrité des informations.",
            link: Some(ExternalLink {
                url: "https://github.com/hdidogs/hsp",
                kind: LinkKind::Repository,
            }),
        }),
    },
    Project {
        title: "Convertisseur GIF",
        description: "Un outil basé sur Python pour convertir des fichiers GIF en formats PNG ou JPEG avec une interface conviviale.",
        image: "/icons/Convert.png",
        category: Category::Application,
        slug: Some("convertisseur-gif"),
        details: Some(ProjectDetails {
            subtitle: "Conversion simple et rapide de fichiers GIF",
            features: &[
                "Interface utilisateur intuitive",
                "Conversion par lots",
                "Prévisualisation des images",
                "Options de qualité personnalisables",
            ],
            technologies: &[
                "Python",
                "Tkinter (Interface graphique)",
                "Pillow (Traitement d'images)",
                "PyInstaller (Packaging)",
            ],
            description: "Cette application de bureau permet aux utilisateurs de convertir facilement des fichiers GIF en formats PNG ou JPEG. L'interface intuitive offre des options de prévisualisation et de personnalisation pour obtenir exactement le résultat souhaité.\n\nL'application prend en charge la **conversion par lots** pour traiter plusieurs fichiers simultanément.",
            link: Some(ExternalLink {
                url: "https://github.com/itsaam/convert-gif",
                kind: LinkKind::Repository,
            }),
        }),
    },
    Project {
        title: "Nuage Air",
        description: "Site web d'aéroport permettant aux utilisateurs de réserver des vols, consulter les horaires et gérer leurs réservations.",
        image: "/icons/yellow.jpg",
        category: Category::SiteWeb,
        slug: Some("nuage-air"),
        details: Some(ProjectDetails {
            subtitle: "Simplifier l'expérience de voyage aérien",
            features: &[
                "Réservation de vols en ligne",
                "Consultation des horaires en temps réel",
                "Gestion des réservations",
                "Informations sur les services aéroportuaires",
            ],
            technologies: &["PHP", "HTML/CSS", "JavaScript", "MySQL (Base de données)"],
            description: "Nuage Air est un site web pour les aéroports qui permet aux voyageurs de réserver des vols, consulter les horaires en temps réel et gérer leurs réservations.\n\nDéveloppé avec des technologies web traditionnelles, ce projet représente l'une de mes premières expériences en développement web.",
            link: Some(ExternalLink {
                url: "https://github.com/Hdidogs/ProjetAeroport",
                kind: LinkKind::Repository,
            }),
        }),
    },
    Project {
        title: "RSS Bot pour Discord",
        description: "Un bot Python pour publier automatiquement les flux RSS dans des salons Discord. Idéal pour la veille technologique.",
        image: "/icons/rss_bot.png",
        category: Category::Bot,
        slug: Some("rss_bot"),
        details: Some(ProjectDetails {
            subtitle: "Automatisez votre veille avec un bot RSS léger et rapide",
            features: &[
                "Récupération de plusieurs flux RSS en parallèle",
                "Publication automatique à intervalles réguliers",
                "Nettoyage du contenu HTML via BeautifulSoup",
                "Détection intelligente des nouveaux articles",
                "Personnalisation des salons Discord de destination",
                "Logs détaillés des événements pour le suivi",
            ],
            technologies: &[
                "Python 3",
                "discord.py",
                "feedparser",
                "BeautifulSoup4",
                "asyncio, logging, datetime, hashlib",
            ],
            description: "RSS Bot est un projet Python permettant de surveiller automatiquement plusieurs flux RSS et de publier les nouveaux articles dans des salons Discord configurés.\n\nLéger, rapide et personnalisable, il est parfait pour automatiser la veille technologique sur un serveur Discord, notamment grâce à son système de logs et sa détection intelligente d'articles déjà publiés.",
            link: Some(ExternalLink {
                url: "https://github.com/itsaam/rss_bot",
                kind: LinkKind::Repository,
            }),
        }),
    },
    Project {
        title: "HSPJAVAFX",
        description: "Version JavaFX de la Plateforme de Services de Santé, offrant une expérience utilisateur native et performante.",
        image: "/icons/hsp.png",
        category: Category::Application,
        slug: Some("hspjavafx"),
        details: Some(ProjectDetails {
            subtitle: "Une expérience utilisateur native pour les professionnels de santé",
            features: &[
                "Interface utilisateur native et réactive",
                "Fonctionnement hors ligne avec synchronisation",
                "Performances optimisées pour les grands volumes de données",
                "Intégration avec les systèmes hospitaliers existants",
            ],
            technologies: &["Java", "JavaFX", "Hibernate (ORM)", "MySQL (Base de données)"],
            description: "HSPJAVAFX est une version desktop de la Plateforme de Services de Santé, développée avec JavaFX pour offrir une expérience utilisateur native et performante.\n\nCette application permet aux professionnels de santé de travailler même en mode hors ligne avec synchronisation ultérieure, et offre des performances optimisées pour gérer de grands volumes de données médicales.",
            link: Some(ExternalLink {
                url: "https://github.com/hdidogs/hspjavafx",
                kind: LinkKind::Repository,
            }),
        }),
    },
    Project {
        title: "YouTube Cleaner",
        description: "Une extension Chrome pour épurer l'interface YouTube en supprimant les Shorts, actualités, pubs et autres éléments distrayants.",
        image: "/icons/youtube_cleaner.png",
        category: Category::ExtensionChrome,
        slug: Some("youtube_cleaner"),
        details: Some(ProjectDetails {
            subtitle: "Améliorez votre expérience YouTube avec une interface minimaliste",
            features: &[
                "Suppression automatique des Shorts, actualités et autres contenus indésirables",
                "Optimisation de la lisibilité et de la concentration sur les vidéos longues",
                "Observateur de mutations pour s'adapter aux changements dynamiques de YouTube",
                "Statistiques internes pour suivre les éléments supprimés",
                "Système de throttling pour des performances optimales",
                "Installation rapide depuis le Chrome Web Store",
            ],
            technologies: &[
                "JavaScript",
                "Chrome Extension API",
                "MutationObserver",
                "DOM manipulation",
                "Web performance optimization",
            ],
            description: "YouTube Cleaner est une extension Chrome développée pour offrir une expérience plus propre et productive sur YouTube. Elle supprime automatiquement les éléments superflus tels que les Shorts, les actualités et autres distractions grâce à un système d'observation en temps réel de la page.\n\nL'extension utilise également un throttling intelligent et collecte des statistiques pour permettre à l'utilisateur de visualiser son impact. Disponible gratuitement sur le *Chrome Web Store*.",
            link: Some(ExternalLink {
                url: "https://chromewebstore.google.com/detail/youtube-cleaner/kmgaioehokllmmcaegmbljhknangbdjh",
                kind: LinkKind::StoreListing,
            }),
        }),
    },
];

const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Mutuelle des Architectes Français | MAF",
        location: "Paris, 17ème",
        period: "2024 - Maintenant",
        role: "Alternance Technicien Informatique",
        responsibilities: &[
            "Configuration et maintenance des postes sous Intune",
            "Automatisation de tâches avec Python",
            "Gestion de l'enrôlement et du support pour des appareils iPhone",
            "Maintenance des postes informatiques et assistance utilisateurs",
        ],
    },
    Experience {
        company: "Engie",
        location: "Paris La Défense",
        period: "Mai - Juin 2022",
        role: "Stage Développeur & Sécurité",
        responsibilities: &[
            "Développement de scripts d'analyse de vulnérabilités sous Linux (Bash, Python)",
            "Contribution à l'évaluation des configurations systèmes et à leur renforcement",
            "Participation à des initiatives de Pentesting et audits de sécurité applicative",
        ],
    },
    Experience {
        company: "St Joseph La Salle",
        location: "Pantin",
        period: "Juin - Juillet 2021",
        role: "Technicien Informatique",
        responsibilities: &[
            "Installation et configuration de serveurs Linux dédiés pour l'hébergement",
            "Mise en place d'environnements de test et intégration continue (Vagrant, VirtualBox)",
        ],
    },
    Experience {
        company: "Pharmacie Bastille",
        location: "Paris 11ème",
        period: "Novembre 2019",
        role: "Stage Développeur Web",
        responsibilities: &[
            "Maintenance et amélioration du site web de l'entreprise en HTML5, CSS3, JavaScript, PHP",
        ],
    },
];

const SKILLS: &[Skill] = &[
    Skill {
        icon: SkillIcon::Code,
        title: "Frontend",
        description: "HTML5, CSS3, JavaScript, React",
    },
    Skill {
        icon: SkillIcon::Server,
        title: "Backend",
        description: "Python, PHP, Java, C#, Laravel",
    },
    Skill {
        icon: SkillIcon::Database,
        title: "Bases de données",
        description: "MySQL, MariaDB",
    },
    Skill {
        icon: SkillIcon::Settings,
        title: "Systèmes & Réseaux",
        description: "Debian, Ubuntu, Windows, Hyper-V, VirtualBox, Vagrant, Apache",
    },
    Skill {
        icon: SkillIcon::Zap,
        title: "Outils & DevOps",
        description: "Git, Github, Jenkins, Unity, AWS, Azure, Grafana, Prometheus",
    },
    Skill {
        icon: SkillIcon::Languages,
        title: "Langues",
        description: "Anglais (C1), Espagnol (A2)",
    },
];

const DIPLOMAS: &[Credential] = &[
    Credential {
        title: "BTS SIO (SLAM)",
        detail: None,
        period: "2024 - 2026",
    },
    Credential {
        title: "Baccalauréat Professionnel",
        detail: Some("Système Numériques"),
        period: "2022 - 2023",
    },
];

const CERTIFICATIONS: &[Credential] = &[Credential {
    title: "DevOps Beginners",
    detail: None,
    period: "2024",
}];

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &'static str, slug: Option<&'static str>) -> Project {
        Project {
            title,
            description: "",
            image: "",
            category: Category::Bot,
            slug,
            details: None,
        }
    }

    fn catalog_of(projects: &[Project]) -> Catalog<'_> {
        Catalog {
            projects,
            experiences: &[],
            skills: &[],
            diplomas: &[],
            certifications: &[],
        }
    }

    #[test]
    fn test_site_catalog_is_valid() {
        assert_eq!(CATALOG.validate(), Ok(()));
        assert!(!CATALOG.projects.is_empty());
        assert!(!CATALOG.experiences.is_empty());
        assert_eq!(CATALOG.skills.len(), 6);
    }

    #[test]
    fn test_every_category_has_a_project() {
        for category in Category::ALL {
            assert!(
                CATALOG.projects.iter().any(|p| p.category == category),
                "no project in {category}"
            );
        }
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let projects = [project("A", Some("same")), project("B", Some("same"))];
        assert_eq!(
            catalog_of(&projects).validate(),
            Err(CatalogError::DuplicateSlug("same".to_string()))
        );
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let projects = [project("A", Some("Has Space"))];
        assert!(matches!(
            catalog_of(&projects).validate(),
            Err(CatalogError::InvalidSlug(_))
        ));
        let projects = [project("A", Some(""))];
        assert!(matches!(
            catalog_of(&projects).validate(),
            Err(CatalogError::InvalidSlug(_))
        ));
    }

    #[test]
    fn test_thumbnail_falls_back_to_placeholder() {
        let mut p = project("A", None);
        assert_eq!(p.thumbnail(), PLACEHOLDER_IMAGE);
        p.image = "  ";
        assert_eq!(p.thumbnail(), PLACEHOLDER_IMAGE);
        p.image = "/icons/a.png";
        assert_eq!(p.thumbnail(), "/icons/a.png");
    }

    #[test]
    fn test_href_only_for_slugged_projects() {
        assert_eq!(project("A", None).href(), None);
        assert_eq!(
            project("A", Some("nuage-air")).href().as_deref(),
            Some("/projects/nuage-air")
        );
    }

    #[test]
    fn test_project_by_slug() {
        let found = CATALOG
            .project_by_slug("nuage-air")
            .expect("nuage-air should be in the catalog");
        assert_eq!(found.title, "Nuage Air");
        assert_eq!(found.category, Category::SiteWeb);
        assert!(CATALOG.project_by_slug("unknown-slug").is_none());
    }
}
