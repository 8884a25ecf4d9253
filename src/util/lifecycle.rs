//! Scoped acquisition for view-owned resources.
//!
//! Timers and event listeners registered by a component must not outlive
//! it. A [`Scoped`] guard owns the handle and releases it exactly once:
//! on an explicit [`Scoped::release`], or on drop if the owner goes away
//! first. Components move the guard into `on_cleanup` so unmount covers
//! every exit path.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// A handle that can be given back to whatever issued it.
pub trait Release {
    /// Cancel the timer / remove the listener this handle refers to.
    fn release(self);
}

/// Owns a releasable handle for the lifetime of a view.
#[derive(Debug)]
pub struct Scoped<R: Release> {
    resource: Option<R>,
}

impl<R: Release> Scoped<R> {
    /// Take ownership of an already-acquired handle.
    pub fn acquire(resource: R) -> Self {
        Self { resource: Some(resource) }
    }

    /// Release the handle now. Later calls (and the eventual drop) do nothing.
    pub fn release(&mut self) {
        if let Some(resource) = self.resource.take() {
            resource.release();
        }
    }

    /// Forget the handle without releasing it, e.g. after a one-shot timer
    /// has already fired.
    pub fn disarm(&mut self) {
        self.resource = None;
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.resource.is_some()
    }
}

impl<R: Release> Drop for Scoped<R> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(feature = "csr")]
impl Release for leptos::prelude::TimeoutHandle {
    fn release(self) {
        self.clear();
    }
}

#[cfg(feature = "csr")]
impl Release for leptos::prelude::WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}
