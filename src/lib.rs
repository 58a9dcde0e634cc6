//! Browser-side back office for the job-board platform.
//!
//! ARCHITECTURE
//! ============
//! `state` owns the persisted session, `net` owns the REST plumbing (token
//! injection and centralized 401/403 reaction included), `util` carries the
//! route-guard and redirect policies, and `pages`/`components` render the
//! management screens behind those policies.
//!
//! Browser-only behavior (localStorage, `window.location`, real HTTP) is
//! gated behind the `hydrate` feature so the crate compiles and unit-tests
//! natively with no features enabled.

pub mod app;
pub mod components;
pub mod config;
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
