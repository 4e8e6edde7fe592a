use leptos::prelude::*;
use leptos_use::{
    use_raf_fn_with_options, use_window_scroll, utils::Pausable, UseRafFnCallbackArgs,
    UseRafFnOptions,
};

use crate::parallax::{ParallaxLayer, ParallaxState};

/// Decorative shape that drifts with the page scroll.
///
/// The frame loop only runs while a spring is catching up with the scroll
/// position and pauses itself once both axes are settled.
#[component]
pub fn ParallaxBlob(layer: ParallaxLayer, #[prop(into)] class: String) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let state = StoredValue::new(ParallaxState::new(layer));
    let (transform, set_transform) = signal(state.with_value(ParallaxState::transform));
    let (moving, set_moving) = signal(false);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let still_moving = state
                .try_update_value(|s| s.tick(args.delta / 1000.0))
                .unwrap_or(false);
            set_transform.set(state.with_value(ParallaxState::transform));
            if !still_moving {
                set_moving.set(false);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        let y = scroll_y.get();
        state.update_value(|s| s.set_scroll(y));
        if !state.with_value(ParallaxState::is_settled) {
            set_moving.set(true);
            resume();
        }
    });

    Effect::new(move |_| {
        if !moving.get() {
            pause();
        }
    });

    view! { <div aria-hidden="true" class=class style:transform=move || transform.get()></div> }
}
