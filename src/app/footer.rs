use leptos::prelude::*;

use crate::{motion::Variant, profile};

use super::reveal::{Motion, RevealGroup};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-10">
            <RevealGroup class="container flex flex-col md:flex-row justify-between items-center">
                <Motion variant=Variant::FadeIn duration=0.5 class="font-bold text-xl mb-4 md:mb-0">
                    <span class="text-primary">{profile::FIRST_NAME}</span>
                    " "
                    {profile::LAST_NAME}
                </Motion>
                <Motion
                    variant=Variant::FadeIn
                    duration=0.5
                    delay=0.4
                    class="text-sm text-muted-foreground mt-4 md:mt-0"
                >
                    {profile::copyright_notice()}
                </Motion>
            </RevealGroup>
        </footer>
    }
}
