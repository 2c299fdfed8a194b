//! # client
//!
//! Leptos + WASM frontend for the SketchSocial art-sharing application.
//!
//! This crate contains pages, components, application state, the mocked
//! backend boundary, and browser-storage helpers. It integrates with the
//! `canvas` crate for imperative drawing via the `DrawingCanvas` component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mounts the application into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger was already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
