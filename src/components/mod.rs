//! Page components, one module per section, composed by [`App`].
//!
//! Components hold no logic of their own beyond wiring signals to the
//! policy types in the rest of the crate: the tracker decides the
//! active section, the typewriter owns the tagline, the relay client
//! owns the network. Teardown is RAII throughout: adapters live in
//! effect state and disconnect when the owner is disposed.

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;

use leptos::prelude::*;

use crate::config;
use crate::content::Section;
use crate::relay::EmailRelay;
use crate::tracker::SectionSpy;

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::FooterSection;
use hero::HeroSection;
use nav::NavBar;
use projects::ProjectsSection;

/// The whole page. Mounted once into the document body.
#[component]
pub fn App() -> impl IntoView {
    let config = config::load_or_default();
    let (active_section, set_active_section) = signal(Section::Home);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&config.site.title);
    }

    // The observer needs the section elements, which exist only after
    // the first render; the effect runs after that and keeps the spy
    // alive in its state until the owner is disposed.
    Effect::new(move |_| {
        SectionSpy::install(move |section| set_active_section.set(section))
            .map_err(|err| log::warn!("section tracking disabled: {err:?}"))
            .ok()
    });

    let relay = EmailRelay::new(config.relay.clone());
    let owner = config.site.owner.clone();

    view! {
        <NavBar active=active_section owner=owner.clone() />
        <main>
            <HeroSection owner=owner.clone() />
            <AboutSection />
            <ProjectsSection />
            <ExperienceSection />
            <ContactSection relay=relay />
        </main>
        <FooterSection
            owner=owner
            github_url=config.site.github_url.clone()
            linkedin_url=config.site.linkedin_url.clone()
        />
    }
}

/// Image that swaps to a placeholder if the real source fails to load.
/// Swaps at most once, so a broken placeholder cannot loop.
#[component]
fn FallbackImg(
    src: &'static str,
    fallback: &'static str,
    alt: &'static str,
    class: &'static str,
) -> impl IntoView {
    let (current, set_current) = signal(src);
    view! {
        <img
            src=move || current.get()
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| {
                if current.get_untracked() != fallback {
                    set_current.set(fallback);
                }
            }
        />
    }
}
