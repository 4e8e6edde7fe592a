use leptos::{html, prelude::*};

use crate::{
    motion::{self, Transition, Variant},
    nav::Section,
    parallax::ParallaxLayer,
    profile,
};

use super::{
    header::{scroll_to_section, ExternalAnchor},
    parallax::ParallaxBlob,
    reveal::use_reveal,
};

#[component]
pub fn Hero() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let visible = use_reveal(node, 0.1);
    let intro = move || {
        motion::style(
            Variant::Rise(75.0),
            visible.get().into(),
            Transition::default().with_duration(0.5).with_delay(0.25),
        )
    };
    let showcase = move || {
        motion::style(
            Variant::Rise(100.0),
            visible.get().into(),
            Transition::default().with_duration(0.5).with_delay(0.5),
        )
    };

    view! {
        <section node_ref=node class="pt-32 pb-20 md:pt-40 md:pb-28 overflow-hidden relative">
            <ParallaxBlob
                layer=ParallaxLayer::HERO_PRIMARY
                class="absolute top-1/3 left-10 w-64 h-64 rounded-full bg-primary/5"
            />
            <ParallaxBlob
                layer=ParallaxLayer::HERO_ACCENT
                class="absolute bottom-1/4 right-10 w-72 h-72 rounded-full bg-accent/5"
            />
            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div style=intro>
                        <div class="inline-block relative mb-4">
                            <span class="text-sm tracking-widest text-primary">{profile::ROLE}</span>
                            <span class="absolute -bottom-2 left-0 h-0.5 bg-primary animate-underline"></span>
                        </div>
                        <h1 class="text-4xl md:text-6xl font-bold leading-tight mb-6 tracking-tight">
                            "Crée des "
                            <span class="inline-block bg-clip-text text-transparent bg-gradient-to-r from-primary to-primary/80 animate-fade-up [animation-delay:0.6s]">
                                "solutions"
                            </span>
                            " performantes et "
                            <span class="inline-block bg-clip-text text-transparent bg-gradient-to-r from-accent to-accent/80 animate-fade-up [animation-delay:0.8s]">
                                "efficaces"
                            </span>
                        </h1>
                        <h3 class="text-xl font-medium mb-3 animate-fade-in [animation-delay:1s]">
                            "Apprendre, coder et résoudre des problèmes"
                        </h3>
                        <p class="text-lg text-muted-foreground mb-6 max-w-2xl mx-auto leading-relaxed animate-fade-in [animation-delay:1.2s]">
                            "Passionné par le back-end, j'aime créer et améliorer des applications. En formation, je cherche une alternance (2 semaines entreprise / 2 semaines école) pour monter en compétences."
                        </p>
                        <div class="flex justify-center mb-6 space-x-6 animate-fade-up [animation-delay:1.4s]">
                            <SocialIcon href=profile::GITHUB_URL icon="/icons/github.png" label="GitHub" />
                            <SocialIcon
                                href=profile::LINKEDIN_URL
                                icon="/icons/linkedin.png"
                                label="LinkedIn"
                            />
                            <SocialIcon href=profile::BENTO_URL icon="/icons/bento.png" label="Bento.me" />
                        </div>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4 animate-fade-up [animation-delay:1.6s]">
                            <button
                                class="px-8 py-4 bg-primary text-primary-foreground font-medium rounded-full flex items-center transition-transform hover:scale-105 active:scale-95"
                                on:click=move |_| {
                                    scroll_to_section(Section::Projects.id());
                                }
                            >
                                "Voir mes projets"
                                <span class="ml-2" aria-hidden="true">"→"</span>
                            </button>
                        </div>
                    </div>

                    <div class="mt-20 relative" style=showcase>
                        <div class="absolute -inset-0.5 bg-gradient-to-r from-primary/20 to-accent/20 rounded-2xl opacity-70 animate-glow"></div>
                        <div class="relative bg-white rounded-2xl shadow-xl overflow-hidden border border-gray-100">
                            <img
                                src="/icons/main.avif"
                                width="1200"
                                height="600"
                                alt="Interface d'un tableau de bord moderne"
                                class="w-full h-auto object-cover"
                            />
                        </div>
                        <FloatingBadge
                            glyph="</>"
                            label="Front end"
                            class="-top-6 -right-6 animate-float"
                            tint="bg-primary/20 text-primary"
                        />
                        <FloatingBadge
                            glyph="⛁"
                            label="Database"
                            class="-bottom-4 -left-6 animate-float-reverse [animation-delay:1s]"
                            tint="bg-accent/20 text-accent"
                        />
                        <FloatingBadge
                            glyph="▤"
                            label="Backend"
                            class="top-1/2 right-0 translate-x-1/2 -translate-y-1/2 animate-drift [animation-delay:0.5s]"
                            tint="bg-pink-500/20 text-pink-500"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialIcon(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <ExternalAnchor href=href label=label class="transition-transform hover:scale-110 hover:-translate-y-1">
            <img src=icon alt=label width="40" height="40" class="rounded-lg" />
        </ExternalAnchor>
    }
}

#[component]
fn FloatingBadge(
    glyph: &'static str,
    label: &'static str,
    class: &'static str,
    tint: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "absolute bg-white rounded-xl shadow-lg p-3 border border-gray-100 {class}",
        )>
            <div class="flex items-center gap-3">
                <div class=format!(
                    "w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold {tint}",
                )>{glyph}</div>
                <p class="text-xs font-medium">{label}</p>
            </div>
        </div>
    }
}
