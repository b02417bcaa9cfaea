//! # dashboard-client
//!
//! Leptos + WASM frontend for the analytics dashboard.
//!
//! This crate contains the route-level pages, reusable panel components, the
//! fetch state model, pure view derivations, and the HTTP layer that talks to
//! the analytics backend. The `server` crate renders it with SSR and the
//! browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod panels;
pub mod state;
pub mod util;
pub mod views;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let api = config::ApiConfig::from_document();
    leptos::mount::hydrate_body(move || view! { <app::App api=api/> });
}
