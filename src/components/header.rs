//! Site header: logo, hamburger toggle, section navigation

use leptos::prelude::*;

use crate::utils::constants::{LOGO_URL, NAV_SECTIONS};
use crate::utils::scroll::{anchor_id, smooth_scroll_to};

/// Fixed header with the league logo, a mobile hamburger toggle, and anchor
/// links to the page sections. Activating a link smooth-scrolls to its
/// section and collapses the mobile menu.
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="header">
            <div class="logo">
                <img src=LOGO_URL alt="Pulse Golf League Logo" class="logo-image"/>
            </div>
            <button
                class="hamburger"
                class:open=move || menu_open.get()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav class="nav" class:open=move || menu_open.get()>
                <ul class="nav-list">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(id, label)| {
                            let href = format!("#{id}");
                            let link_href = href.clone();
                            view! {
                                <li>
                                    <a
                                        href=link_href
                                        class="nav-link"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            if let Some(target) = anchor_id(&href) {
                                                smooth_scroll_to(target);
                                            }
                                            set_menu_open.set(false);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
