//! Contact form. Field values live in signals, the submit handler
//! drives the [`SubmissionState`] machine, and the relay call runs on
//! a spawned task so the form stays responsive.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::relay::{EmailRelay, SubmissionState, TemplateParams};

#[component]
pub fn ContactSection(relay: EmailRelay) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmissionState::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().in_flight() {
            return;
        }
        set_status.set(SubmissionState::Submitting);
        let params = TemplateParams::sanitized(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        let relay = relay.clone();
        spawn_local(async move {
            match relay.send(&params).await {
                Ok(()) => {
                    // A successful send empties the form; a failed one
                    // keeps the draft so nothing is lost on retry.
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                    set_status.set(SubmissionState::Succeeded);
                }
                Err(err) => {
                    log::error!("contact form send failed: {err}");
                    set_status.set(SubmissionState::Failed);
                }
            }
        });
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-card">
                <p class="contact-intro">
                    "Have a project in mind, a question, or just want to connect? Feel free to reach out!"
                </p>
                <form class="contact-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="user_name">"Full Name"</label>
                        <input
                            type="text"
                            id="user_name"
                            name="user_name"
                            placeholder="Your Name"
                            required
                            aria-required="true"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="user_email">"Email Address"</label>
                        <input
                            type="email"
                            id="user_email"
                            name="user_email"
                            placeholder="your.email@example.com"
                            required
                            aria-required="true"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="message">"Message"</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            placeholder="Your message..."
                            required
                            aria-required="true"
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="form-submit"
                        disabled=move || status.get().in_flight()
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="20"
                            height="20"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            aria-hidden="true"
                        >
                            <line x1="22" y1="2" x2="11" y2="13"></line>
                            <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                        </svg>
                        <span>
                            {move || {
                                if status.get().in_flight() { "Sending..." } else { "Send Message" }
                            }}
                        </span>
                    </button>
                    {move || match status.get() {
                        SubmissionState::Succeeded => {
                            view! {
                                <p class="form-note form-note-ok">
                                    "Thank you for your message! I will get back to you soon."
                                </p>
                            }
                                .into_any()
                        }
                        SubmissionState::Failed => {
                            view! {
                                <p class="form-note form-note-err">
                                    "There was an error sending your message. Please try again later."
                                </p>
                            }
                                .into_any()
                        }
                        SubmissionState::Idle | SubmissionState::Submitting => ().into_any(),
                    }}
                </form>
            </div>
        </section>
    }
}
