//! # Viewport Geometry
//!
//! Scroll-driven effects on the page depend on two browser measurements:
//! the vertical scroll offset and the viewport height. [`ViewGeometry`]
//! abstracts them so the effect math can run against a deterministic fake
//! in tests, and [`BrowserGeometry`] is the live implementation.
//!
//! The effect math itself is pure:
//!
//! - [`hero_parallax_px`] - hero background offset per scroll position
//! - [`backdrop_parallax_px`] - features backdrop translation
//! - [`crosses_reveal_line`] - whether a card top has entered the reveal zone

use web_sys::window;

/// Parallax rate of the hero background relative to the scroll offset.
pub const HERO_PARALLAX_RATE: f64 = 0.2;

/// Parallax rate of the features backdrop layer.
pub const BACKDROP_PARALLAX_RATE: f64 = 0.1;

/// Fraction of the viewport height a card's top edge must rise above before
/// the card is revealed.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

/// Read-only view of the browser viewport.
pub trait ViewGeometry {
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;
    /// Inner viewport height in pixels.
    fn viewport_height(&self) -> f64;
}

/// Live geometry backed by `web_sys::window()`.
///
/// Failed lookups report `0.0`, which leaves the dependent effect at rest
/// instead of panicking.
pub struct BrowserGeometry;

impl ViewGeometry for BrowserGeometry {
    fn scroll_offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
}

/// Vertical background offset of the hero, in pixels, at `scroll_offset`.
///
/// The background moves against the scroll direction at one fifth the rate,
/// so `s = 250` yields `-50.0`.
pub fn hero_parallax_px(scroll_offset: f64) -> f64 {
    -(scroll_offset * HERO_PARALLAX_RATE)
}

/// Downward translation of the features backdrop at `scroll_offset`.
pub fn backdrop_parallax_px(scroll_offset: f64) -> f64 {
    scroll_offset * BACKDROP_PARALLAX_RATE
}

/// Whether a card whose top edge sits at `card_top` (viewport coordinates)
/// has crossed the reveal line.
pub fn crosses_reveal_line(card_top: f64, viewport_height: f64) -> bool {
    card_top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeGeometry {
        scroll: f64,
        height: f64,
    }

    impl ViewGeometry for FakeGeometry {
        fn scroll_offset(&self) -> f64 {
            self.scroll
        }
        fn viewport_height(&self) -> f64 {
            self.height
        }
    }

    #[test]
    fn test_hero_background_tracks_scroll_at_fixed_rate() {
        assert_eq!(hero_parallax_px(0.0), 0.0);
        assert_eq!(hero_parallax_px(250.0), -50.0);
        assert_eq!(hero_parallax_px(1000.0), -200.0);
    }

    #[test]
    fn test_backdrop_moves_with_scroll() {
        assert_eq!(backdrop_parallax_px(0.0), 0.0);
        assert_eq!(backdrop_parallax_px(500.0), 50.0);
    }

    #[test]
    fn test_card_at_half_viewport_reveals() {
        let geo = FakeGeometry {
            scroll: 0.0,
            height: 1000.0,
        };
        assert!(crosses_reveal_line(500.0, geo.viewport_height()));
    }

    #[test]
    fn test_card_below_trigger_point_stays_hidden() {
        let geo = FakeGeometry {
            scroll: 0.0,
            height: 1000.0,
        };
        assert!(!crosses_reveal_line(950.0, geo.viewport_height()));
        // Exactly on the line counts as not yet crossed.
        assert!(!crosses_reveal_line(800.0, geo.viewport_height()));
    }

    #[test]
    fn test_fake_geometry_drives_the_same_math() {
        let geo = FakeGeometry {
            scroll: 320.0,
            height: 900.0,
        };
        assert_eq!(hero_parallax_px(geo.scroll_offset()), -64.0);
        assert_eq!(backdrop_parallax_px(geo.scroll_offset()), 32.0);
    }
}
