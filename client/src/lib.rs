//! # client
//!
//! Leptos + WASM frontend for the Genius Chess Academy site.
//!
//! The crate carries the visitor session layer: a persisted identity store,
//! the auth controller that hydrates and mutates the session, and the route
//! guard that gates protected pages. Pages and components consume that layer
//! through Leptos context.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
