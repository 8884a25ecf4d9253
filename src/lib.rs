//! # folio
//!
//! Leptos + WASM single-page portfolio: splash overlay, sticky navigation
//! with scroll-linked highlighting, content sections, and a persisted
//! light/dark theme.
//!
//! The view state lives in plain Rust stores under [`state`] that build and
//! test without a browser. Browser access is confined to [`util`] and the
//! components, behind the `csr` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and context providers |
//! | [`pages`] | Page composition and scroll tracking |
//! | [`components`] | Header, splash overlay, content sections |
//! | [`state`] | Theme, active section, splash, and menu stores |
//! | [`util`] | Storage, DOM helpers, scoped timers/listeners |
//! | [`config`] | Defaults and page-level overrides |
//! | [`content`] | Static content tables |

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    log::info!("mounting {}", content::OWNER_NAME);
    leptos::mount::mount_to_body(app::App);
}
