//! Tradvio Web Frontend
//!
//! Leptos-based WASM frontend rendering the marketing landing page and the
//! simulated chat widget. Everything runs client-side; there is no backend.

mod app;
mod chat;
mod components;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
