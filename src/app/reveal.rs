use leptos::{context::Provider, html, prelude::*};
use leptos_use::{
    core::IntoElementsMaybeSignal, use_intersection_observer_with_options,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::motion::{
    self, observer_thresholds, reveal_ratio, Reveal, Stagger, Transition, Variant,
    GROUP_THRESHOLD, SECTION_THRESHOLD,
};

/// Visibility of the nearest revealing ancestor, read by [`Motion`] and
/// [`RevealItem`] children.
#[derive(Debug, Clone, Copy)]
struct RevealContext {
    visible: Signal<bool>,
    stagger: Stagger,
}

/// Watches `target` and flips to `true` once it has been seen at
/// `threshold`. The observer is disconnected after the first reveal.
pub fn use_reveal<El, M>(target: El, threshold: f64) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M> + 'static,
    M: 'static,
{
    let latch = Reveal::new(threshold);
    let thresholds = observer_thresholds(latch.threshold());
    let reveal = StoredValue::new(latch);
    let visible = RwSignal::new(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let viewport = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            let ratio = entries
                .iter()
                .map(|entry| {
                    let rect = entry.bounding_client_rect();
                    reveal_ratio(rect.top(), rect.height(), viewport)
                })
                .fold(0.0, f64::max);
            let fired = reveal
                .try_update_value(|r| r.observe(ratio))
                .unwrap_or(false);
            if fired {
                visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(thresholds),
    );

    Effect::new(move |_| {
        if visible.get() {
            stop();
        }
    });

    visible.into()
}

fn context_or_visible() -> RevealContext {
    use_context::<RevealContext>().unwrap_or(RevealContext {
        visible: Signal::derive(|| true),
        stagger: Stagger::CONTAINER,
    })
}

/// A page section that fades in as a whole and reveals its [`Motion`]
/// children with the container stagger.
#[component]
pub fn AnimatedSection(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional, into)] class: String,
    #[prop(default = Variant::FadeIn)] variant: Variant,
    #[prop(default = SECTION_THRESHOLD)] threshold: f64,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let visible = use_reveal(node, threshold);
    let ctx = RevealContext {
        visible,
        stagger: Stagger::CONTAINER,
    };
    let style = move || motion::style(variant, visible.get().into(), Transition::default());

    view! {
        <section node_ref=node id=id class=class style=style>
            <Provider value=ctx>{children()}</Provider>
        </section>
    }
}

/// Invisible trigger for a group of [`Motion`] children, e.g. a card grid.
#[component]
pub fn RevealGroup(
    #[prop(optional, into)] class: String,
    #[prop(default = GROUP_THRESHOLD)] threshold: f64,
    #[prop(default = Stagger::CONTAINER)] stagger: Stagger,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_reveal(node, threshold);

    view! {
        <div node_ref=node class=class>
            <Provider value=RevealContext { visible, stagger }>{children()}</Provider>
        </div>
    }
}

/// Animated child of a revealing ancestor. Without an ancestor it renders
/// in its resting state.
///
/// The delay is `delay` when given, otherwise the ancestor's stagger for
/// `order`, otherwise zero.
#[component]
pub fn Motion(
    #[prop(default = Variant::FadeIn)] variant: Variant,
    #[prop(optional)] order: Option<usize>,
    #[prop(optional)] delay: Option<f64>,
    #[prop(optional)] duration: Option<f64>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let RevealContext { visible, stagger } = context_or_visible();
    let mut transition = Transition::default();
    if let Some(duration) = duration {
        transition = transition.with_duration(duration);
    }
    let delay = delay.unwrap_or_else(|| order.map(|i| stagger.delay(i)).unwrap_or_default());
    let transition = transition.with_delay(delay);
    let style = move || motion::style(variant, visible.get().into(), transition);

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// List entry nudged in from the left, cascading by `index`.
#[component]
pub fn RevealItem(
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let RevealContext { visible, .. } = context_or_visible();
    let transition = Transition::default()
        .with_duration(0.4)
        .with_delay(Stagger::LIST.delay(index));
    let style = move || {
        motion::style(
            Variant::SlideFrom(-20.0),
            visible.get().into(),
            transition,
        )
    };

    view! {
        <li class=class style=style>
            {children()}
        </li>
    }
}
