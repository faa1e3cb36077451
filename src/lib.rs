//! # replexify-web
//!
//! Leptos + WASM front-end for Replexify, an AI customer-support automation
//! product. Renders the public marketing site, the register/login/OTP flows,
//! and a session-gated dashboard with a context upload manager.
//!
//! The remote backend is an opaque HTTP service; this crate holds no
//! credentials itself. Session identity lives in an HttpOnly cookie managed
//! by the backend and is only observable through `GET /auth`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the WASM loader in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
