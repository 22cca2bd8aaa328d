//! Home page

use leptos::ev;
use leptos::prelude::*;

use crate::components::{Features, Hero};
use crate::state::use_page_state;
use crate::utils::geometry::{BrowserGeometry, ViewGeometry};

/// The marketing page: hero plus feature grid.
///
/// Owns the single window scroll listener feeding [`PageState::scroll_y`];
/// the hero parallax, the features backdrop, and the card reveals all derive
/// from that one signal.
///
/// [`PageState::scroll_y`]: crate::state::PageState
#[component]
pub fn HomePage() -> impl IntoView {
    let page = use_page_state();

    // Seed once so a page restored mid-scroll renders correct offsets
    // before the first scroll event.
    page.scroll_y.set(BrowserGeometry.scroll_offset());

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        page.scroll_y.set(BrowserGeometry.scroll_offset());
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <Hero/>
        <Features/>
    }
}
