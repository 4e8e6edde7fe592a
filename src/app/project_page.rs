use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use crate::{
    catalog::CATALOG,
    details::{render_detail, DetailView},
    motion::Variant,
};

use super::{
    footer::Footer,
    header::{ExternalAnchor, SubpageHeader},
    reveal::{AnimatedSection, Motion, RevealGroup},
    NotFound,
};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match render_detail(&CATALOG, &slug()) {
        Ok(detail) => Either::Left(view! { <ProjectDetail detail=detail /> }),
        Err(_) => Either::Right(view! { <NotFound /> }),
    }
}

#[component]
fn ProjectDetail(detail: DetailView) -> impl IntoView {
    let link_label = detail.link_label();
    let DetailView {
        title,
        subtitle,
        category,
        image,
        description_html,
        features,
        technologies,
        link,
        ..
    } = detail;

    view! {
        <Title text=title />
        <SubpageHeader />
        <main class="container py-12 md:py-20">
            <A href="/#projects" attr:class="inline-flex items-center text-sm text-muted-foreground hover:text-primary mb-8">
                <span class="mr-2" aria-hidden="true">"←"</span>
                "Retour aux projets"
            </A>
            <AnimatedSection class="max-w-4xl mx-auto">
                <Motion>
                    <div class="text-sm text-primary mb-2">{category.label()}</div>
                    <h1 class="text-3xl md:text-5xl font-bold mb-4">{title}</h1>
                    {subtitle
                        .map(|subtitle| {
                            view! { <p class="text-lg text-muted-foreground mb-8">{subtitle}</p> }
                        })}
                </Motion>
                <Motion variant=Variant::ScaleUp order=1>
                    <img
                        src=image
                        alt=title
                        class="w-full rounded-xl shadow-xl border mb-10 object-cover"
                    />
                </Motion>
                <Motion order=2>
                    <div class="prose max-w-none mb-10" inner_html=description_html.to_string()></div>
                </Motion>
            </AnimatedSection>
            <RevealGroup class="max-w-4xl mx-auto grid md:grid-cols-2 gap-8">
                <Motion variant=Variant::SlideIn order=0>
                    <div class="bg-muted rounded-lg p-6">
                        <h2 class="text-xl font-semibold mb-4">"Fonctionnalités Clés"</h2>
                        <ul class="space-y-2">
                            {features
                                .iter()
                                .map(|f| {
                                    view! {
                                        <li class="flex items-start">
                                            <span class="text-primary mr-2">"•"</span>
                                            {*f}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Motion>
                <Motion variant=Variant::SlideInRight order=1>
                    <div class="bg-muted rounded-lg p-6">
                        <h2 class="text-xl font-semibold mb-4">"Technologies Utilisées"</h2>
                        <div class="flex flex-wrap gap-2">
                            {technologies
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="px-3 py-1 rounded-full bg-primary/10 text-primary text-sm">
                                            {*t}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Motion>
            </RevealGroup>
            {link
                .zip(link_label)
                .map(|(link, label)| {
                    view! {
                        <div class="max-w-4xl mx-auto mt-10 text-center">
                            <ExternalAnchor
                                href=link.url
                                class="inline-flex items-center px-8 py-4 bg-primary text-primary-foreground font-medium rounded-full"
                            >
                                {label}
                                <span class="ml-2" aria-hidden="true">"↗"</span>
                            </ExternalAnchor>
                        </div>
                    }
                })}
        </main>
        <Footer />
    }
}
