//! Page-level reactive state

pub mod latch;
pub mod page;

pub use latch::Latch;
pub use page::{provide_page_state, use_page_state, PageState};
