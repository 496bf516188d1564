//! # nimbus-pricing
//!
//! Leptos + WASM marketing/pricing page for Nimbus AI. Renders the tier
//! comparison grid and mirrors the hosted auth service's session state
//! into the nav and the call-to-action targets; authentication, billing,
//! and subscription logic all live in that external service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: panic hook, console logging, hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
