//! Browser client for the userhub account service.
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-scoped orchestration, `components` render shared chrome,
//! `net` wraps the HTTP account API, `state` holds session and form state,
//! and `util` isolates browser storage and redirect concerns.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
