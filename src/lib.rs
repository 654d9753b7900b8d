//! # support-chat
//!
//! Leptos + WASM customer-support chat widget. Collects user input, sends
//! it to the chat backend over HTTP, and renders the conversation history
//! including expandable details of any backend function calls made while
//! producing a reply.
//!
//! This crate contains the root app shell, the chat panel components,
//! view state, and the wire types + HTTP client for the backend boundary.
//! Browser-only code is gated behind the `hydrate` feature so the crate
//! compiles (and its unit tests run) natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
