//! # portal-client
//!
//! Leptos + WASM frontend for the tenant knowledge portal.
//!
//! This crate owns the browser-side authentication session: logging in
//! against the portal API, persisting the token and user profile to
//! `localStorage`, and sending the user to a role-appropriate landing route.
//! Pages and components sit on top of that session state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
