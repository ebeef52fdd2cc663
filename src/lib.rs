//! Skymart web client: drone-products storefront plus admin back-office.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-rendered Leptos application. Public pages (home, catalog,
//! contact) and auth forms talk to the remote REST API; the admin section is
//! gated by client-side route guards. Session state lives in browser
//! `localStorage` and is propagated across tabs and in-page surfaces by the
//! notifier in `util::events`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
