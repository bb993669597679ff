//! # client
//!
//! Leptos + WASM chat viewer. Lists a company's chats and shows the
//! transcript of the selected one, both fetched from the remote chat
//! service.
//!
//! This crate contains the page shell, the two loader components, the
//! fetch lifecycle state they share, and the network types. The `server`
//! crate renders it with the `ssr` feature; the browser bundle is built
//! with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
