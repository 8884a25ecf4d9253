//! Thin wrappers over the browser APIs the view state touches.
//!
//! Everything here requires a browser environment. Without the `csr`
//! feature the functions are inert: no preference signal, no section
//! elements, and class/style writes do nothing.

#[cfg(feature = "csr")]
use leptos::prelude::{TimeoutHandle, WindowListenerHandle};

use crate::state::sections::{SectionBounds, SectionGeometry, SectionId};
use crate::state::theme::Theme;
#[cfg(feature = "csr")]
use crate::util::lifecycle::Scoped;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Failures from browser APIs that callers must react to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// `setTimeout` refused the callback.
    #[error("failed to schedule timeout of {delay_ms}ms: {reason}")]
    Timeout { delay_ms: u64, reason: String },
}

/// Class toggled on `<html>` for dark styling.
pub const DARK_CLASS: &str = "dark";

#[cfg(feature = "csr")]
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the system "prefers dark" signal.
///
/// Returns `None` when the environment cannot answer, so the caller
/// falls through to its own default.
pub fn prefers_dark() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        match window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(mq)) => Some(mq.matches()),
            Ok(None) | Err(_) => None,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Add or remove the dark class on the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let class_list = el.class_list();
        let result = if theme.is_dark() {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if let Err(e) = result {
            log::warn!("failed to apply theme class: {e:?}");
        }
    }
}

/// Lock or restore page scrolling via `overflow` on `<body>`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let value = if locked { "hidden" } else { "auto" };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("failed to set body overflow: {e:?}");
        }
    }
}

/// Reads section boxes from the live document via `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSectionGeometry;

impl SectionGeometry for DomSectionGeometry {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        #[cfg(feature = "csr")]
        {
            let document = web_sys::window()?.document()?;
            let rect = document.get_element_by_id(section.dom_id())?.get_bounding_client_rect();
            Some(SectionBounds::new(rect.top(), rect.bottom()))
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

/// Register `on_scroll` for window scroll events until the guard is released.
#[cfg(feature = "csr")]
pub fn watch_scroll(on_scroll: impl Fn() + 'static) -> Scoped<WindowListenerHandle> {
    Scoped::acquire(leptos::prelude::window_event_listener(leptos::ev::scroll, move |_| on_scroll()))
}

/// Schedule `callback` once after `delay_ms`, cancelled if the guard is
/// released first.
#[cfg(feature = "csr")]
pub fn start_timeout(delay_ms: u64, callback: impl FnOnce() + 'static) -> Result<Scoped<TimeoutHandle>, DomError> {
    leptos::prelude::set_timeout_with_handle(callback, std::time::Duration::from_millis(delay_ms))
        .map(Scoped::acquire)
        .map_err(|e| DomError::Timeout { delay_ms, reason: format!("{e:?}") })
}
