//! # showcase-client
//!
//! Leptos + WASM frontend for the certification showcase site.
//!
//! This crate contains the pages, presentational components, UI state, and
//! the two browser mechanisms the site relies on: the theme controller
//! (pre-paint resolve/apply plus navigation, OS, and cross-tab resync) and
//! hover-triggered link prefetching.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
