//! # testlab-client
//!
//! Leptos + WASM front end for TestLab, the multi-tenant product-testing
//! admin. All persistence lives in the managed backend; this crate holds the
//! pages, components, client-side state, the backend client and the services
//! that orchestrate it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
