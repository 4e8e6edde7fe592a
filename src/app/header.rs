use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::{
    nav::{MenuState, Section},
    profile,
};

/// Smoothly scrolls the element with `id` into view. Returns `false` and
/// does nothing when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no element #{id} to scroll to");
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Scrolls to the section named by the URL fragment once the page is
/// mounted, and again whenever the fragment changes.
pub fn use_fragment_scroll() {
    let location = use_location();
    Effect::new(move |_| {
        let hash = location.hash.get();
        if let Some(section) = Section::from_fragment(&hash) {
            // layout of the freshly mounted page settles within a frame
            request_animation_frame(move || {
                scroll_to_section(section.id());
            });
        }
    });
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <span class="text-primary">{profile::FIRST_NAME}</span>
        " "
        {profile::LAST_NAME}
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "sticky top-0 z-40 w-full border-b bg-background/80 backdrop-blur shadow-sm transition-shadow"
    } else {
        "sticky top-0 z-40 w-full border-b bg-background/80 backdrop-blur transition-shadow"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let (_, scroll_y) = use_window_scroll();

    let go_to = move |section: Section| {
        let section = set_menu
            .try_update(|m| m.select(section))
            .unwrap_or(section);
        scroll_to_section(section.id());
    };

    let nav_links = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button class=class on:click=move |_| go_to(section)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || header_class(scroll_y.get() > 10.0)>
            <div class="container flex h-16 items-center justify-between">
                <button
                    class="font-bold text-xl"
                    on:click=move |_| {
                        set_menu.update(MenuState::close);
                        scroll_to_top();
                    }
                >
                    <Brand />
                </button>
                <nav class="hidden md:flex gap-6">
                    {nav_links("text-sm font-medium hover:text-primary transition-colors")}
                </nav>
                <div class="flex items-center gap-4">
                    <a
                        href=profile::CV_PATH
                        download=profile::CV_FILE_NAME
                        class="hidden md:inline-flex px-4 py-2 rounded-full bg-primary text-primary-foreground text-sm font-medium"
                    >
                        "Télécharger CV"
                    </a>
                    <button
                        class="md:hidden text-2xl w-10 h-10"
                        aria-label="Menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| set_menu.update(MenuState::toggle)
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <nav class="md:hidden container flex flex-col gap-2 pb-4 animate-menu-in">
                    {nav_links("text-left text-sm font-medium hover:text-primary transition-colors py-2")}
                    <a
                        href=profile::CV_PATH
                        download=profile::CV_FILE_NAME
                        class="text-sm font-medium text-primary py-2"
                        on:click=move |_| set_menu.update(MenuState::close)
                    >
                        "Télécharger CV"
                    </a>
                </nav>
            </Show>
        </header>
    }
}

/// Header of pages other than the home page: links jump back to the home
/// page sections.
#[component]
pub fn SubpageHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 w-full border-b bg-background/80 backdrop-blur">
            <div class="container flex h-16 items-center justify-between">
                <A href="/" attr:class="font-bold text-xl">
                    <Brand />
                </A>
                <nav class="flex gap-4 md:gap-6 overflow-x-auto">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <A
                                    href=section.href()
                                    attr:class="text-sm font-medium hover:text-primary transition-colors whitespace-nowrap"
                                >
                                    {section.label()}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// Anchor that opens outside the site in a new browsing context.
#[component]
pub fn ExternalAnchor(
    href: &'static str,
    #[prop(optional, into)] class: String,
    #[prop(optional)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class=class aria-label=label>
            {children()}
        </a>
    }
}
