//! Fixed navigation bar: brand mark, section links with the active
//! highlight, and the collapsible mobile menu.

use leptos::prelude::*;

use crate::content::{NAV_TARGETS, Section};
use crate::scroll::{self, ScrollWatch};

#[component]
pub fn NavBar(active: ReadSignal<Section>, owner: String) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    // Listener guard lives in the effect state; dropping it on dispose
    // removes the listener.
    Effect::new(move |_| ScrollWatch::install(move |past| set_scrolled.set(past)));

    // Activating any link closes the mobile menu, whether or not it was
    // open; the default anchor jump is suppressed at each handler.
    let navigate = move |section: Section| {
        scroll::scroll_to(section);
        set_menu_open.set(false);
    };

    let brand = format!("{owner}.");

    view! {
        <nav class="site-nav" class:scrolled=move || scrolled.get()>
            <div class="nav-inner">
                <a
                    href="#home"
                    class="brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate(Section::Home);
                    }
                >
                    {brand}
                </a>
                <ul class="nav-links">
                    {NAV_TARGETS
                        .iter()
                        .map(|target| {
                            let section = target.section;
                            view! {
                                <li>
                                    <a
                                        href=section.anchor()
                                        class:active=move || active.get() == section
                                        aria-current=move || {
                                            (active.get() == section).then_some("page")
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            navigate(section);
                                        }
                                    >
                                        {target.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                </button>
            </div>
            <ul class="mobile-links" class:open=move || menu_open.get()>
                {NAV_TARGETS
                    .iter()
                    .map(|target| {
                        let section = target.section;
                        view! {
                            <li>
                                <a
                                    href=section.anchor()
                                    class:active=move || active.get() == section
                                    aria-current=move || {
                                        (active.get() == section).then_some("page")
                                    }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        navigate(section);
                                    }
                                >
                                    {target.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
