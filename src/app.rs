mod experiences;
mod footer;
mod header;
mod hero;
mod homepage;
mod parallax;
mod project_page;
mod projects;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile;

use footer::Footer;
use header::SubpageHeader;
use homepage::HomePage;
use project_page::ProjectPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/png" href="/fav.png" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background antialiased font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title: String| format!("{} | {title}", profile::full_name()) />
        <SiteMeta />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects/:slug") view=ProjectPage />
            </Routes>
        </Router>
    }
}

/// Description, OpenGraph and Twitter card tags shared by every page.
#[component]
fn SiteMeta() -> impl IntoView {
    let title = profile::site_title();
    let image = format!("{}{}", profile::SITE_URL, profile::SOCIAL_IMAGE);
    view! {
        <Meta name="description" content=profile::SITE_DESCRIPTION />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=profile::SITE_DESCRIPTION />
        <Meta property="og:url" content=profile::SITE_URL />
        <Meta property="og:site_name" content=profile::SITE_NAME />
        <Meta property="og:image" content=image.clone() />
        <Meta property="og:locale" content="fr_FR" />
        <Meta property="og:type" content="website" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=profile::SITE_DESCRIPTION />
        <Meta name="twitter:image" content=image />
    }
}

/// Rendered for unknown routes and unknown project slugs.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page introuvable" />
        <SubpageHeader />
        <main class="container py-24 text-center">
            <p class="text-sm tracking-widest text-primary mb-4">"404"</p>
            <h1 class="text-3xl md:text-4xl font-bold mb-4">"Page introuvable"</h1>
            <p class="text-muted-foreground mb-8">
                "La page demandée n'existe pas ou a été déplacée."
            </p>
            <A
                href="/"
                attr:class="inline-flex px-6 py-3 bg-primary text-primary-foreground rounded-full font-medium"
            >
                "Retour à l'accueil"
            </A>
        </main>
        <Footer />
    }
}
