//! # client
//!
//! Leptos + WASM frontend for the OncoScan detector hub.
//!
//! This crate contains the catalog landing page, the per-detector upload and
//! prediction page, their state models and the prediction endpoint client.
//! The `server` crate renders the same `App` for SSR and hydration.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("console logger init failed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
