//! Samim Services marketing site — Leptos components and page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate compiles twice: to WASM with the `hydrate` feature for the
//! browser, and natively with the `ssr` feature inside the server binary.
//! All content is static display text; the only interactive state is the
//! mobile menu flag owned by the page shell.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod seo;
pub mod state;
pub mod util;

/// Browser entry point. Hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
