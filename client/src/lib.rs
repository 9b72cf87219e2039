//! # client
//!
//! Leptos + WASM front end for the digit pad.
//!
//! The page is a single drawing pad: the `canvas` crate owns pixels and
//! pointer state, `predict` owns the service contract, and this crate wires
//! DOM events, reactive state, and the browser `fetch` transport together.
//! Browser-only code is gated behind the `csr` feature so the state and
//! submission logic test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("prediction endpoint: {}", config::api_url());
    leptos::mount::mount_to_body(app::App);
}
