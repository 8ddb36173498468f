//! # triage-console
//!
//! Leptos + WASM operator console for an automated email-triage agent.
//! Operators submit inbound emails, inspect the agent's routing decision and
//! execution trace, browse reference data (users, orders, sent replies), and
//! work the human-escalation queue. The agent itself runs behind the `/api`
//! surface; this crate is the client-side orchestration and rendering layer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
