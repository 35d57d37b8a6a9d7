//! # client
//!
//! Leptos + WASM frontend for the admin dashboard.
//!
//! This crate contains the route guard, pages, components, session state and
//! the typed REST client. Authorization rules come from the `access` crate so
//! the browser and the server edge gate decide identically.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
