//! Site constants

/// Hero background video, supplied by the asset pipeline.
pub const GOLF_VIDEO_URL: &str = "/assets/videos/golf_video.mp4";

/// League logo shown in the header.
pub const LOGO_URL: &str = "/assets/images/pgl_logo.png";

/// The loader is never shown longer than this, video event or not.
pub const VIDEO_READY_TIMEOUT_MS: u32 = 4_000;

/// Header anchors in display order: (section id, label).
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("events", "Events"),
    ("players", "Players"),
    ("about", "About"),
    ("contact", "Contact"),
];

/// Feature grid copy: (title, blurb).
pub const FEATURE_CARDS: &[(&str, &str)] = &[
    (
        "Elite Competition",
        "Top players from around the globe compete in thrilling tournaments.",
    ),
    (
        "Innovative Format",
        "Fast-paced, dynamic events designed for fans and players alike.",
    ),
    (
        "Global Reach",
        "Events hosted on iconic courses across the world.",
    ),
];
