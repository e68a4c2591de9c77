//! Landing view: name, typed tagline, calls to action.

use leptos::prelude::*;

use crate::content::{Section, TAGLINE_FRAGMENTS};
use crate::scroll;
use crate::tagline::Typewriter;

#[component]
pub fn HeroSection(owner: String) -> impl IntoView {
    let (tagline, set_tagline) = signal(String::new());
    let (typing_done, set_typing_done) = signal(false);

    // The typewriter handle lives in the effect state; disposing the
    // owner drops it, which cancels whatever timeout is pending.
    Effect::new(move |_| {
        Typewriter::start(
            &TAGLINE_FRAGMENTS,
            move |text| set_tagline.set(text),
            move || set_typing_done.set(true),
        )
    });

    view! {
        <section id="home" class="hero">
            <h1 class="hero-name">{owner}</h1>
            <p class="hero-tagline">
                <span>{move || tagline.get()}</span>
                <Show when=move || !typing_done.get()>
                    <span class="typing-cursor">"|"</span>
                </Show>
            </p>
            <div class="hero-actions">
                <a
                    href="#projects"
                    class="cta cta-primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll::scroll_to(Section::Projects);
                    }
                >
                    "View My Work"
                </a>
                <a
                    href="#contact"
                    class="cta cta-secondary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll::scroll_to(Section::Contact);
                    }
                >
                    "Get In Touch"
                </a>
            </div>
            <a
                href="#about"
                class="hero-scroll-hint"
                aria-label="Scroll to About section"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll::scroll_to(Section::About);
                }
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    width="40"
                    height="40"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="m7 6 5 5 5-5" />
                    <path d="m7 13 5 5 5-5" />
                </svg>
            </a>
        </section>
    }
}
