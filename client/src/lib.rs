//! # client
//!
//! Leptos + WASM front-end for the stock manager.
//!
//! Pages and components render state owned by the `stockmanager` core crate;
//! this crate adds the browser pieces: the `gloo-net` transport, the
//! `localStorage` session store, dropped-file reading, and routing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
