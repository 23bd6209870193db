//! # registro-client
//!
//! Leptos frontend for the registration dashboard: login, navigation shell
//! and the four record sections (clients, animals, horseshoes, documents).
//!
//! The crate compiles natively for server-side rendering (`ssr`) and to WASM
//! for hydration in the browser (`hydrate`). All record state lives in
//! page-local signals; see `state` for the shared CRUD model.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating registro client");
    leptos::mount::hydrate_body(app::App);
}
