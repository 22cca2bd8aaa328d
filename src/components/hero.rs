//! Hero section with background video

use std::time::Duration;

use leptos::prelude::*;

use crate::state::use_page_state;
use crate::utils::constants::{GOLF_VIDEO_URL, VIDEO_READY_TIMEOUT_MS};
use crate::utils::geometry::hero_parallax_px;
use crate::utils::scroll::smooth_scroll_to;

/// Full-viewport hero: autoplaying background video, headline, and a
/// call-to-action that scrolls down to the feature grid.
///
/// Readiness is a race between the video's `canplaythrough` event and a
/// one-shot fallback timer; the first signal trips the shared latch and the
/// loser is inert. The loader is therefore never visible longer than the
/// timeout, even with a missing or unplayable asset.
#[component]
pub fn Hero() -> impl IntoView {
    let page = use_page_state();

    let fallback = set_timeout_with_handle(
        move || {
            log::debug!("video readiness fallback timer fired");
            page.video_ready.trip();
        },
        Duration::from_millis(u64::from(VIDEO_READY_TIMEOUT_MS)),
    );
    if let Ok(fallback) = fallback {
        on_cleanup(move || fallback.clear());
    }

    view! {
        <section
            id="home"
            class="hero"
            style:background-position-y=move || {
                format!("{}px", hero_parallax_px(page.scroll_y.get()))
            }
        >
            // muted is mirrored as a property: the attribute alone does not
            // stick on renderer-created elements, and an unmuted video never
            // autoplays
            <video
                class="hero-video"
                autoplay
                muted
                prop:muted=true
                loop
                playsinline
                on:canplaythrough=move |_| {
                    log::debug!("hero video can play through");
                    page.video_ready.trip();
                }
            >
                <source src=GOLF_VIDEO_URL type="video/mp4"/>
                "Your browser does not support the video tag."
            </video>
            <div class="hero-overlay"></div>
            <h1 class="hero-title animate-fade-in">
                <span class="logo-highlight animate-heartbeat">"Pulse"</span>
                " Golf League"
            </h1>
            <p class="hero-text animate-fade-in-slow">
                "Join the revolution in professional golf."
            </p>
            <button class="cta-button" on:click=move |_| smooth_scroll_to("features")>
                "Learn More"
            </button>
        </section>
    }
}
