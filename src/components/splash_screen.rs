//! Full-screen splash overlay shown once on first load.

use leptos::prelude::*;

use crate::content::SPLASH_HEADING;
use crate::state::splash::SplashController;
use crate::util::dom;

/// Splash overlay.
///
/// Mounted while the splash is not yet dismissed. On mount it locks page
/// scrolling and starts the one-shot dismissal timer. Once dismissing, the
/// overlay fades out over the exit duration and completes on
/// `transitionend` or `transitioncancel`, with a fallback timer in case the
/// browser reports neither. Pending timers are cancelled and scrolling is
/// restored on unmount, whichever way the overlay goes away.
#[component]
pub fn SplashScreen() -> impl IntoView {
    let splash = expect_context::<RwSignal<SplashController>>();
    let exit_ms = splash.with_untracked(SplashController::exit_ms);

    dom::set_scroll_locked(true);

    let finish_exit = move || {
        if splash.try_update(SplashController::finish_exit) == Some(true) {
            dom::set_scroll_locked(false);
        }
    };

    #[cfg(feature = "csr")]
    {
        use leptos::prelude::TimeoutHandle;

        use crate::util::lifecycle::Scoped;

        let expire_timer = StoredValue::new(None::<Scoped<TimeoutHandle>>);
        let exit_timer = StoredValue::new(None::<Scoped<TimeoutHandle>>);

        let on_expire = move || {
            expire_timer.update_value(|t| {
                if let Some(t) = t.as_mut() {
                    t.disarm();
                }
            });
            splash.update(|s| {
                s.expire();
            });
            let Some(deadline_ms) = splash.with_untracked(SplashController::exit_deadline_ms) else {
                return;
            };
            match dom::start_timeout(deadline_ms, finish_exit) {
                Ok(timer) => exit_timer.set_value(Some(timer)),
                Err(e) => {
                    log::warn!("splash exit timer unavailable, finishing now: {e}");
                    finish_exit();
                }
            }
        };

        let delay_ms = splash.with_untracked(SplashController::delay_ms);
        match dom::start_timeout(delay_ms, on_expire) {
            Ok(timer) => expire_timer.set_value(Some(timer)),
            Err(e) => {
                log::warn!("splash timer unavailable, dismissing immediately: {e}");
                on_expire();
            }
        }

        on_cleanup(move || {
            for slot in [expire_timer, exit_timer] {
                slot.try_update_value(|t| {
                    if let Some(mut timer) = t.take() {
                        timer.release();
                    }
                });
            }
            dom::set_scroll_locked(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    on_cleanup(|| dom::set_scroll_locked(false));

    view! {
        <div
            class="splash"
            class:splash--exiting=move || !splash.with(SplashController::is_visible)
            style:transition-duration=format!("{exit_ms}ms")
            on:transitionend=move |_| finish_exit()
            on:transitioncancel=move |_| finish_exit()
        >
            <div class="splash__content">
                <h1 class="splash__heading">{SPLASH_HEADING}</h1>
            </div>
        </div>
    }
}
