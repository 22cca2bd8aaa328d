//! Pulse Golf League marketing site - Leptos frontend
//!
//! Single-page brand site: hero video, scroll-revealed feature grid,
//! collapsible navigation.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Pulse Golf League site starting...");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
