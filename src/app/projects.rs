use leptos::{either::Either, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_query_map},
    NavigateOptions,
};

use crate::{
    catalog::{Project, CATALOG},
    filter::{select, ProjectFilter, TAB_QUERY_KEY},
    motion::Variant,
};

use super::reveal::{AnimatedSection, Motion, RevealGroup};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let query = use_query_map();
    let filter =
        Memo::new(move |_| ProjectFilter::from_query(query.read().get(TAB_QUERY_KEY).as_deref()));

    view! {
        <AnimatedSection id="projects" class="container py-12 md:py-20 scroll-mt-20">
            <Motion>
                <h2 class="text-2xl md:text-3xl font-bold mb-3 md:mb-4">"Projets Récents"</h2>
            </Motion>
            <Motion>
                <p class="text-muted-foreground mb-8 md:mb-10 max-w-[800px] text-sm md:text-base">
                    "Une sélection de mes travaux récents sur des applications et des sites web."
                </p>
            </Motion>
            <div
                role="tablist"
                aria-label="Catégories de projets"
                class="mb-6 md:mb-8 flex flex-wrap gap-2"
            >
                {ProjectFilter::tabs()
                    .map(|tab| {
                        let selected = move || filter.get() == tab;
                        view! {
                            <button
                                role="tab"
                                id=format!("tab-{}", tab.key())
                                aria-controls="project-grid"
                                aria-selected=move || selected().to_string()
                                class=move || {
                                    if selected() {
                                        "px-4 py-2 rounded-md text-sm font-medium bg-primary text-primary-foreground"
                                    } else {
                                        "px-4 py-2 rounded-md text-sm font-medium bg-muted hover:bg-muted/70"
                                    }
                                }
                                on:click=move |_| {
                                    let navigate = use_navigate();
                                    navigate(
                                        &tab.href(),
                                        NavigateOptions {
                                            replace: true,
                                            scroll: false,
                                            ..Default::default()
                                        },
                                    )
                                }
                            >
                                {tab.tab_label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            // a fresh grid per tab replays the staggered entrance
            {move || {
                let filter = filter.get();
                view! { <ProjectGrid filter=filter /> }
            }}
        </AnimatedSection>
    }
}

#[component]
fn ProjectGrid(filter: ProjectFilter) -> impl IntoView {
    let projects = select(CATALOG.projects, filter);
    let label = format!("tab-{}", filter.key());

    view! {
        <div id="project-grid" role="tabpanel" aria-labelledby=label>
            <RevealGroup class="grid gap-4 md:gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <Motion variant=Variant::ScaleUp order=i class="h-full">
                                <ProjectCard project=project />
                            </Motion>
                        }
                    })
                    .collect_view()}
            </RevealGroup>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let body = view! {
        <div class="overflow-hidden group h-full rounded-lg border bg-card hover:shadow-lg transition-shadow duration-300">
            <div class="relative aspect-[16/10] overflow-hidden">
                <img
                    src=project.thumbnail()
                    alt=project.title
                    class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 group-focus-visible:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                    <span class="px-4 py-2 rounded-md bg-secondary text-secondary-foreground text-sm font-medium">
                        "Voir le projet"
                    </span>
                </div>
            </div>
            <div class="p-4">
                <div class="text-sm text-primary mb-1">{project.category.label()}</div>
                <h3 class="font-semibold text-lg mb-2">{project.title}</h3>
                <p class="text-muted-foreground text-sm">{project.description}</p>
            </div>
        </div>
    };

    match project.href() {
        Some(href) => Either::Left(view! {
            <A href=href attr:class="block h-full group focus-visible:outline-none">
                {body}
            </A>
        }),
        None => Either::Right(view! { <div class="block h-full">{body}</div> }),
    }
}
