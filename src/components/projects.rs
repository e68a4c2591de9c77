//! Project cards: thumbnail, blurb, tech tags, and an external link.

use leptos::prelude::*;

use crate::content::{PROJECTS, THUMB_FALLBACK_URL};

use super::FallbackImg;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <h2 class="section-title">"My Projects"</h2>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <FallbackImg
                                    src=project.image_url
                                    fallback=THUMB_FALLBACK_URL
                                    alt=project.title
                                    class="project-thumb"
                                />
                                <div class="project-body">
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-blurb">{project.description}</p>
                                    <ul class="tech-tags">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tag| view! { <li class="tech-tag">{*tag}</li> })
                                            .collect_view()}
                                    </ul>
                                    <a
                                        class="project-link"
                                        href=project.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "View Project"
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
