//! Experience timeline. Falls back to a short note when there are no
//! entries to show.

use leptos::prelude::*;

use crate::content::{Experience, EXPERIENCES, NO_EXPERIENCE_NOTE};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let entries: &[Experience] = &EXPERIENCES;
    let timeline = if entries.is_empty() {
        view! { <p class="experience-empty">{NO_EXPERIENCE_NOTE}</p> }.into_any()
    } else {
        view! {
            <div class="timeline">
                {entries
                    .iter()
                    .map(|entry| {
                        view! {
                            <article class="timeline-entry">
                                <div class="timeline-marker"></div>
                                <div class="timeline-body">
                                    <h3 class="timeline-role">{entry.role}</h3>
                                    <p class="timeline-company">{entry.company}</p>
                                    <p class="timeline-duration">{entry.duration}</p>
                                    <ul class="timeline-highlights">
                                        {entry
                                            .highlights
                                            .iter()
                                            .map(|point| view! { <li>{*point}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="experience" class="section experience">
            <h2 class="section-title">"My Experience"</h2>
            {timeline}
        </section>
    }
}
