//! One-shot splash overlay lifecycle.
//!
//! ```text
//! Visible --expire()--> Dismissing --finish_exit()--> Dismissed
//! ```
//!
//! `expire` is driven by a single timer started when the overlay mounts;
//! `finish_exit` by the end of the fade-out transition, or by a fallback
//! timer at [`SplashController::exit_deadline_ms`] when the browser never
//! reports one. Both are idempotent and there is no way back to `Visible`.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

/// How long the overlay stays up before it starts fading, in milliseconds.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2500;

/// Duration of the fade-out transition, in milliseconds.
pub const DEFAULT_SPLASH_EXIT_MS: u64 = 500;

/// Slack past the fade duration before the exit is forced.
pub const EXIT_GRACE_MS: u64 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashPhase {
    /// Overlay shown, timer pending.
    #[default]
    Visible,
    /// Timer fired; overlay is fading out but still mounted.
    Dismissing,
    /// Fade finished; overlay unmounted and page scrolling restored.
    Dismissed,
}

/// Sole owner of splash visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplashController {
    phase: SplashPhase,
    delay_ms: u64,
    exit_ms: u64,
}

impl Default for SplashController {
    fn default() -> Self {
        Self::new(DEFAULT_SPLASH_DELAY_MS, DEFAULT_SPLASH_EXIT_MS)
    }
}

impl SplashController {
    #[must_use]
    pub fn new(delay_ms: u64, exit_ms: u64) -> Self {
        Self { phase: SplashPhase::Visible, delay_ms, exit_ms }
    }

    #[must_use]
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Delay the owning view should schedule `expire` after.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Length of the fade-out transition.
    #[must_use]
    pub fn exit_ms(&self) -> u64 {
        self.exit_ms
    }

    /// While dismissing: how long after `expire` the exit must be forced if
    /// no transition event arrives. `None` in any other phase.
    #[must_use]
    pub fn exit_deadline_ms(&self) -> Option<u64> {
        (self.phase == SplashPhase::Dismissing).then_some(self.exit_ms + EXIT_GRACE_MS)
    }

    /// Splash visibility. Flips to `false` once, when the timer fires.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == SplashPhase::Visible
    }

    /// Whether the overlay element should still be in the tree.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != SplashPhase::Dismissed
    }

    /// Timer expiry. Returns `true` only on the transition out of `Visible`.
    ///
    /// With a zero-length exit there is no fade to wait for, so the exit
    /// completes in the same step.
    pub fn expire(&mut self) -> bool {
        if self.phase != SplashPhase::Visible {
            return false;
        }
        self.phase = SplashPhase::Dismissing;
        log::debug!("splash dismissing after {}ms", self.delay_ms);
        if self.exit_ms == 0 {
            self.finish_exit();
        }
        true
    }

    /// Exit transition finished. Returns `true` only on the transition
    /// out of `Dismissing`; an early or repeated call is ignored.
    pub fn finish_exit(&mut self) -> bool {
        if self.phase != SplashPhase::Dismissing {
            return false;
        }
        self.phase = SplashPhase::Dismissed;
        log::debug!("splash dismissed");
        true
    }
}
