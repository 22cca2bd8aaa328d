//! UI Components

pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loader;
pub mod styles;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use loader::Loader;
pub use styles::SiteStyles;
