use leptos::prelude::*;

use crate::{
    catalog::{Experience, CATALOG},
    motion::Variant,
};

use super::reveal::{AnimatedSection, Motion, RevealGroup, RevealItem};

#[component]
pub fn ExperiencesSection() -> impl IntoView {
    view! {
        <AnimatedSection id="experiences" class="py-20 scroll-mt-20">
            <div class="container mx-auto px-6 relative z-10">
                <Motion>
                    <h2 class="text-3xl font-bold mb-8 text-center">"Expériences professionnelles"</h2>
                </Motion>
                <div class="space-y-16">
                    {CATALOG
                        .experiences
                        .iter()
                        .enumerate()
                        .map(|(i, experience)| {
                            view! {
                                <Motion variant=Variant::alternating(i) order=i>
                                    <ExperienceCard experience=experience />
                                </Motion>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn ExperienceCard(experience: &'static Experience) -> impl IntoView {
    view! {
        <div class="bg-muted p-8 rounded-xl shadow-lg transition-all duration-300 hover:shadow-2xl hover:-translate-y-1 relative overflow-hidden group">
            <div class="absolute top-0 right-0 w-32 h-32 bg-primary/10 rounded-bl-full z-0 opacity-50 transition-transform duration-300 group-hover:scale-110"></div>
            <div class="relative z-10">
                <h3 class="text-2xl font-semibold mb-2">{experience.company}</h3>
                <p class="text-muted-foreground mb-4">
                    <span class="mr-2" aria-hidden="true">"⌖"</span>
                    {experience.location}
                </p>
                <p class="text-muted-foreground mb-4">
                    <span class="mr-2" aria-hidden="true">"◷"</span>
                    {experience.period}
                </p>
                <p class="text-xl font-medium mb-4">{experience.role}</p>
                // responsibilities reveal on their own once the list is in view
                <RevealGroup>
                    <ul class="list-none space-y-2">
                        {experience
                            .responsibilities
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <RevealItem index=i class="flex items-start">
                                        <span class="text-primary mr-2">"•"</span>
                                        {*item}
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </ul>
                </RevealGroup>
            </div>
        </div>
    }
}
