//! # theme-toggle
//!
//! Leptos + WASM page with a light/dark theme switch whose choice persists
//! in `localStorage` across visits.
//!
//! The `theme` module holds the host-independent controller and its
//! in-memory adapters; `util` binds it to the browser in hydrate builds.
//! The `ssr` feature adds the server shell used by the binary.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
