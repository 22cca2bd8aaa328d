//! Shared page state

use leptos::prelude::*;

use super::latch::Latch;

/// Context shared by the loader, hero, and features sections.
#[derive(Clone, Copy)]
pub struct PageState {
    /// Current vertical scroll offset in pixels. Written only by the home
    /// page's scroll listener; every scroll-driven effect derives from it.
    pub scroll_y: RwSignal<f64>,
    /// Set once the hero video can play through, or the fallback timer
    /// fires, whichever comes first.
    pub video_ready: Latch,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            scroll_y: RwSignal::new(0.0),
            video_ready: Latch::new(),
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_page_state() -> PageState {
    let state = PageState::new();
    provide_context(state);
    state
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_rest() {
        let state = PageState::new();
        assert_eq!(state.scroll_y.get_untracked(), 0.0);
        assert!(!state.video_ready.is_set_untracked());
    }
}
