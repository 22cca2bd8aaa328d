//! Loading overlay

use leptos::prelude::*;

use crate::state::use_page_state;

/// Full-screen golf-ball loader, rendered exactly while the hero video is
/// not ready. Once the readiness latch trips it disappears for good.
#[component]
pub fn Loader() -> impl IntoView {
    let page = use_page_state();

    view! {
        <Show when=move || !page.video_ready.is_set()>
            <div class="loader" aria-hidden="true">
                <div class="loader-golf-ball"></div>
            </div>
        </Show>
    }
}
