use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    catalog::{Credential, Skill, CATALOG},
    motion::Variant,
    parallax::ParallaxLayer,
    profile,
};

use super::{
    experiences::ExperiencesSection,
    footer::Footer,
    header::{use_fragment_scroll, ExternalAnchor, Header},
    hero::Hero,
    parallax::ParallaxBlob,
    projects::ProjectsSection,
    reveal::{AnimatedSection, Motion, RevealGroup},
};

#[component]
pub fn HomePage() -> impl IntoView {
    use_fragment_scroll();

    view! {
        <Title text=profile::ROLE />
        <div class="relative flex min-h-screen flex-col overflow-x-hidden">
            <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <ParallaxBlob
                    layer=ParallaxLayer::BACKGROUND_PRIMARY
                    class="absolute -top-40 -right-40 w-96 h-96 rounded-full bg-primary/5 blur-3xl"
                />
                <ParallaxBlob
                    layer=ParallaxLayer::BACKGROUND_ACCENT
                    class="absolute top-1/2 -left-40 w-[30rem] h-[30rem] rounded-full bg-accent/5 blur-3xl"
                />
            </div>
            <Header />
            <main class="flex-1">
                <Hero />
                <About />
                <Credentials />
                <ProjectsSection />
                <ExperiencesSection />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <AnimatedSection id="about" class="py-12 md:py-20 bg-muted/50 scroll-mt-20">
            <div class="container mx-auto px-4 md:px-6 relative z-10">
                <Motion>
                    <h2 class="text-2xl md:text-4xl font-bold mb-6 md:mb-8 text-center">
                        "À propos de moi"
                    </h2>
                </Motion>
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 md:gap-12">
                    <Motion variant=Variant::SlideIn class="w-full md:w-1/2 px-4 md:px-8">
                        <p class="text-base md:text-lg leading-relaxed mb-6 text-justify">
                            "Passionné par le développement et en constante évolution, je suis un développeur junior déterminé à perfectionner mes compétences. Actuellement, je me spécialise en React et HTML pour le frontend, ainsi qu'en Python et PHP pour le backend."
                        </p>
                        <p class="text-base md:text-lg leading-relaxed text-justify">
                            "J'ai également de l'expérience avec les bases de données MongoDB et MySQL, ce qui me permet de concevoir des applications complètes et optimisées."
                        </p>
                    </Motion>
                    <RevealGroup class="w-full md:w-1/2 grid grid-cols-1 sm:grid-cols-2 gap-4 md:gap-6 px-4 md:px-8">
                        {CATALOG
                            .skills
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <Motion variant=Variant::ScaleUp order=i>
                                        <SkillCard skill=skill />
                                    </Motion>
                                }
                            })
                            .collect_view()}
                    </RevealGroup>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="h-full bg-gray-100 p-6 rounded-lg shadow-md hover:shadow-lg hover:-translate-y-1 transition duration-300">
            <span class=format!("text-3xl {}", skill.icon.color_class()) aria-hidden="true">
                {skill.icon.glyph()}
            </span>
            <h3 class="text-xl font-semibold mt-4 mb-2">{skill.title}</h3>
            <p class="text-gray-600">{skill.description}</p>
        </div>
    }
}

#[component]
fn Credentials() -> impl IntoView {
    view! {
        <AnimatedSection class="container py-20 scroll-mt-20">
            <div class="grid md:grid-cols-2 gap-10">
                <Motion variant=Variant::SlideIn>
                    <CredentialCard heading="Mes diplômes" entries=CATALOG.diplomas />
                </Motion>
                <Motion variant=Variant::SlideInRight order=1>
                    <CredentialCard heading="Mes certifications" entries=CATALOG.certifications />
                </Motion>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn CredentialCard(heading: &'static str, entries: &'static [Credential]) -> impl IntoView {
    view! {
        <div class="h-full bg-background rounded-lg p-6 space-y-4 hover:shadow-lg hover:-translate-y-1 transition duration-300">
            <h3 class="text-xl font-semibold">{heading}</h3>
            <div class="space-y-4">
                {entries
                    .iter()
                    .map(|entry| {
                        let meta = match entry.detail {
                            Some(detail) => format!("{detail} • {}", entry.period),
                            None => entry.period.to_string(),
                        };
                        view! {
                            <div>
                                <div class="font-medium">{entry.title}</div>
                                <div class="text-sm text-muted-foreground">{meta}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let link_class = "hover:text-primary transition-colors";
    let row_class = "flex items-center gap-3 transition-transform hover:translate-x-1";

    view! {
        <AnimatedSection id="contact" class="container py-20 scroll-mt-20">
            <Motion>
                <h2 class="text-3xl font-bold mb-4">"Contactez-moi"</h2>
            </Motion>
            <Motion>
                <p class="text-muted-foreground mb-6 max-w-[500px]">
                    "Intéressé par une collaboration ? N'hésitez pas à me contacter pour des projets ou simplement pour échanger."
                </p>
            </Motion>
            <RevealGroup class="space-y-4 mt-8">
                <Motion variant=Variant::SlideIn order=0 class=row_class>
                    <span class="text-primary" aria-hidden="true">"✉"</span>
                    <a href=profile::mailto() class=link_class>
                        {profile::EMAIL}
                    </a>
                </Motion>
                <Motion variant=Variant::SlideIn order=1 class=row_class>
                    <span class="text-primary" aria-hidden="true">"in"</span>
                    <ExternalAnchor href=profile::LINKEDIN_URL class=link_class>
                        {profile::display_url(profile::LINKEDIN_URL)}
                    </ExternalAnchor>
                </Motion>
                <Motion variant=Variant::SlideIn order=2 class=row_class>
                    <span class="text-primary" aria-hidden="true">"⌥"</span>
                    <ExternalAnchor href=profile::GITHUB_URL class=link_class>
                        {profile::display_url(profile::GITHUB_URL)}
                    </ExternalAnchor>
                </Motion>
                <Motion variant=Variant::SlideIn order=3 class=row_class>
                    <span class="text-primary" aria-hidden="true">"⤓"</span>
                    <a href=profile::SYNTHESIS_PATH download=profile::SYNTHESIS_FILE_NAME class=link_class>
                        "Télécharger le tableau synthèse"
                    </a>
                </Motion>
            </RevealGroup>
        </AnimatedSection>
    }
}
