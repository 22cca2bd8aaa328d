//! Smooth scrolling to in-page anchors

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Extract the element id from a fragment href (`"#players"` -> `"players"`).
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll the viewport to the element with `id`.
///
/// Anchors without a matching section are skipped; the header links to a few
/// sections the page does not render yet.
pub fn smooth_scroll_to(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(section) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("nav target #{id} not in document, skipping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id_strips_the_hash() {
        assert_eq!(anchor_id("#players"), Some("players"));
        assert_eq!(anchor_id("#home"), Some("home"));
    }

    #[test]
    fn test_anchor_id_rejects_non_fragments() {
        assert_eq!(anchor_id("players"), None);
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }
}
