//! Features section with reveal-on-scroll cards

use std::collections::HashSet;

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::use_page_state;
use crate::utils::constants::FEATURE_CARDS;
use crate::utils::geometry::{
    backdrop_parallax_px, crosses_reveal_line, BrowserGeometry, ViewGeometry,
};

/// Feature grid with a decorative parallax backdrop.
///
/// Reveal state is a monotonic set of card indices derived from scroll
/// ticks: a card whose top edge rises above 80% of the viewport joins the
/// set and nothing ever removes it, so revealed cards stay revealed.
#[component]
pub fn Features() -> impl IntoView {
    let page = use_page_state();
    let (revealed, set_revealed) = signal(HashSet::<usize>::new());

    let card_refs: [NodeRef<Div>; FEATURE_CARDS.len()] =
        std::array::from_fn(|_| NodeRef::new());

    Effect::new(move || {
        let _ = page.scroll_y.get();
        let viewport_height = BrowserGeometry.viewport_height();
        if viewport_height <= 0.0 {
            return;
        }
        for (index, card_ref) in card_refs.iter().enumerate() {
            if revealed.with_untracked(|cards| cards.contains(&index)) {
                continue;
            }
            let Some(card) = card_ref.get_untracked() else {
                continue;
            };
            let top = card.get_bounding_client_rect().top();
            if crosses_reveal_line(top, viewport_height) {
                set_revealed.update(|cards| {
                    cards.insert(index);
                });
            }
        }
    });

    view! {
        <section id="features" class="features">
            // Generated pseudo-elements have no runtime handle, so the
            // parallax backdrop is a real element.
            <div
                class="features-backdrop"
                aria-hidden="true"
                style:transform=move || {
                    format!("translateY({}px)", backdrop_parallax_px(page.scroll_y.get()))
                }
            ></div>
            <h2 class="features-title animate-fade-in">"Why Pulse Golf League?"</h2>
            <div class="feature-grid">
                {FEATURE_CARDS
                    .iter()
                    .enumerate()
                    .map(|(index, &(title, blurb))| {
                        let card_ref = card_refs[index];
                        view! {
                            <div
                                class="feature-card"
                                class:visible=move || revealed.with(|cards| cards.contains(&index))
                                node_ref=card_ref
                            >
                                <h3 class="feature-card-title">{title}</h3>
                                <p>{blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
