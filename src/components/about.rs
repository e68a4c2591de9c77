//! About section: portrait, Markdown body copy, and the skills panel
//! whose bars fill the first time they scroll into view.

use leptos::prelude::*;
use pulldown_cmark::{Parser, html as md_html};

use crate::content::{AVATAR_FALLBACK_URL, SKILLS};
use crate::tracker::RevealOnce;

use super::FallbackImg;

/// Body copy, authored as Markdown and embedded at build time.
const ABOUT_MD: &str = include_str!("../../content/about.md");

/// Element id watched for the one-shot skills reveal.
const SKILLS_PANEL_ID: &str = "skills-panel";

fn about_html() -> String {
    let parser = Parser::new(ABOUT_MD);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let (skills_shown, set_skills_shown) = signal(false);

    Effect::new(move |_| {
        RevealOnce::install(SKILLS_PANEL_ID, move || set_skills_shown.set(true))
            .map_err(|err| log::warn!("skills reveal disabled: {err:?}"))
            .ok()
    });

    view! {
        <section id="about" class="section about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-grid">
                <div class="about-photo">
                    <FallbackImg
                        src="assets/biruk.svg"
                        fallback=AVATAR_FALLBACK_URL
                        alt="Biruk"
                        class="avatar"
                    />
                </div>
                <div class="about-copy" inner_html=about_html()></div>
                <div id=SKILLS_PANEL_ID class="skills">
                    <h3>"My Skills"</h3>
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            let pct = skill.level_pct;
                            view! {
                                <div class="skill">
                                    <div class="skill-head">
                                        <span class="skill-name">{skill.name}</span>
                                        <span class="skill-level">{format!("{pct}%")}</span>
                                    </div>
                                    <div class="skill-track">
                                        <div
                                            class="skill-bar"
                                            style:width=move || {
                                                if skills_shown.get() {
                                                    format!("{pct}%")
                                                } else {
                                                    "0%".to_owned()
                                                }
                                            }
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// =========================================================================
// Tests
// =========================================================================
