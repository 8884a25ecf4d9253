use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::util::lifecycle::{Release, Scoped};

type Callback = Box<dyn FnOnce()>;

/// Deterministic stand-in for the browser timer queue.
#[derive(Default)]
struct ManualTimers {
    now: Cell<u64>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<(u64, u64, Callback)>>,
}

struct TimerHandle {
    id: u64,
    timers: Rc<ManualTimers>,
}

impl Release for TimerHandle {
    fn release(self) {
        self.timers.pending.borrow_mut().retain(|(id, _, _)| *id != self.id);
    }
}

impl ManualTimers {
    fn schedule(self: &Rc<Self>, delay_ms: u64, callback: impl FnOnce() + 'static) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let deadline = self.now.get() + delay_ms;
        self.pending.borrow_mut().push((id, deadline, Box::new(callback)));
        TimerHandle { id, timers: Rc::clone(self) }
    }

    /// Move the clock to `now` and run every callback that is due.
    fn advance_to(&self, now: u64) {
        self.now.set(now);
        let due: Vec<Callback> = {
            let mut pending = self.pending.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(_, deadline, _)| *deadline <= now);
            *pending = rest;
            due.into_iter().map(|(_, _, cb)| cb).collect()
        };
        for cb in due {
            cb();
        }
    }

    fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

/// Mounts a splash the way the overlay component does.
fn mount(timers: &Rc<ManualTimers>, splash: &Rc<RefCell<SplashController>>) -> Scoped<TimerHandle> {
    let delay = splash.borrow().delay_ms();
    let target = Rc::clone(splash);
    Scoped::acquire(timers.schedule(delay, move || {
        target.borrow_mut().expire();
    }))
}

// =============================================================
// State machine
// =============================================================

#[test]
fn starts_visible_with_default_delay() {
    let splash = SplashController::default();
    assert_eq!(splash.phase(), SplashPhase::Visible);
    assert!(splash.is_visible());
    assert!(splash.is_mounted());
    assert_eq!(splash.delay_ms(), DEFAULT_SPLASH_DELAY_MS);
}

#[test]
fn expire_then_finish_exit() {
    let mut splash = SplashController::default();

    assert!(splash.expire());
    assert_eq!(splash.phase(), SplashPhase::Dismissing);
    assert!(!splash.is_visible());
    assert!(splash.is_mounted());

    assert!(splash.finish_exit());
    assert_eq!(splash.phase(), SplashPhase::Dismissed);
    assert!(!splash.is_mounted());
}

#[test]
fn finish_exit_before_expire_is_ignored() {
    let mut splash = SplashController::default();
    assert!(!splash.finish_exit());
    assert_eq!(splash.phase(), SplashPhase::Visible);
}

#[test]
fn transitions_fire_once() {
    let mut splash = SplashController::default();
    assert!(splash.expire());
    assert!(!splash.expire());
    assert!(splash.finish_exit());
    assert!(!splash.finish_exit());
    assert!(!splash.expire());
    assert_eq!(splash.phase(), SplashPhase::Dismissed);
    assert!(!splash.is_visible());
}

// =============================================================
// Timer-driven visibility
// =============================================================

#[test]
fn visible_strictly_before_delay() {
    for elapsed in [0, 1, 1000, DEFAULT_SPLASH_DELAY_MS - 1] {
        let timers = Rc::new(ManualTimers::default());
        let splash = Rc::new(RefCell::new(SplashController::default()));
        let _guard = mount(&timers, &splash);

        timers.advance_to(elapsed);
        assert!(splash.borrow().is_visible(), "elapsed {elapsed}");
    }
}

#[test]
fn hidden_at_and_after_delay() {
    for elapsed in [DEFAULT_SPLASH_DELAY_MS, DEFAULT_SPLASH_DELAY_MS + 1, 60_000] {
        let timers = Rc::new(ManualTimers::default());
        let splash = Rc::new(RefCell::new(SplashController::default()));
        let _guard = mount(&timers, &splash);

        timers.advance_to(elapsed);
        assert!(!splash.borrow().is_visible(), "elapsed {elapsed}");
    }
}

#[test]
fn never_visible_again_once_hidden() {
    let timers = Rc::new(ManualTimers::default());
    let splash = Rc::new(RefCell::new(SplashController::default()));
    let _guard = mount(&timers, &splash);

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    splash.borrow_mut().finish_exit();
    for t in [3000, 10_000, 100_000] {
        timers.advance_to(t);
        assert!(!splash.borrow().is_visible());
    }
    assert_eq!(timers.pending(), 0);
}

#[test]
fn custom_delay_is_honored() {
    let timers = Rc::new(ManualTimers::default());
    let splash = Rc::new(RefCell::new(SplashController::new(800, DEFAULT_SPLASH_EXIT_MS)));
    let _guard = mount(&timers, &splash);

    timers.advance_to(799);
    assert!(splash.borrow().is_visible());
    timers.advance_to(800);
    assert!(!splash.borrow().is_visible());
}

// =============================================================
// Cancellation on teardown
// =============================================================

#[test]
fn teardown_before_deadline_cancels_timer() {
    let timers = Rc::new(ManualTimers::default());
    let splash = Rc::new(RefCell::new(SplashController::default()));
    let mut guard = mount(&timers, &splash);

    timers.advance_to(1000);
    guard.release();
    assert_eq!(timers.pending(), 0);

    timers.advance_to(5000);
    assert_eq!(splash.borrow().phase(), SplashPhase::Visible);
}

#[test]
fn dropping_the_guard_cancels_timer() {
    let timers = Rc::new(ManualTimers::default());
    let splash = Rc::new(RefCell::new(SplashController::default()));
    drop(mount(&timers, &splash));

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    assert!(splash.borrow().is_visible());
}

#[test]
fn releasing_after_fire_is_harmless() {
    let timers = Rc::new(ManualTimers::default());
    let splash = Rc::new(RefCell::new(SplashController::default()));
    let mut guard = mount(&timers, &splash);

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    guard.release();
    assert_eq!(splash.borrow().phase(), SplashPhase::Dismissing);
}

// =============================================================
// Exit completion
// =============================================================

#[test]
fn zero_length_exit_completes_on_expire() {
    let mut splash = SplashController::new(DEFAULT_SPLASH_DELAY_MS, 0);
    assert!(splash.expire());
    assert_eq!(splash.phase(), SplashPhase::Dismissed);
    assert!(!splash.is_mounted());
    assert_eq!(splash.exit_deadline_ms(), None);
}

#[test]
fn exit_deadline_only_while_dismissing() {
    let mut splash = SplashController::default();
    assert_eq!(splash.exit_ms(), DEFAULT_SPLASH_EXIT_MS);
    assert_eq!(splash.exit_deadline_ms(), None);

    splash.expire();
    assert_eq!(splash.exit_deadline_ms(), Some(DEFAULT_SPLASH_EXIT_MS + EXIT_GRACE_MS));

    splash.finish_exit();
    assert_eq!(splash.exit_deadline_ms(), None);
}

/// Overlay as mounted by the component: the expire timer, then a fallback
/// exit timer scheduled once dismissing. Counts how often scrolling would
/// be unlocked.
struct MountedSplash {
    splash: Rc<RefCell<SplashController>>,
    expire_timer: Scoped<TimerHandle>,
    exit_timer: Rc<RefCell<Option<Scoped<TimerHandle>>>>,
    unlocks: Rc<Cell<u32>>,
}

impl MountedSplash {
    fn finish(splash: &RefCell<SplashController>, unlocks: &Cell<u32>) {
        if splash.borrow_mut().finish_exit() {
            unlocks.set(unlocks.get() + 1);
        }
    }

    fn mount(timers: &Rc<ManualTimers>, splash: SplashController) -> Self {
        let splash = Rc::new(RefCell::new(splash));
        let exit_timer = Rc::new(RefCell::new(None));
        let unlocks = Rc::new(Cell::new(0));

        let delay = splash.borrow().delay_ms();
        let on_expire = {
            let splash = Rc::clone(&splash);
            let exit_timer = Rc::clone(&exit_timer);
            let unlocks = Rc::clone(&unlocks);
            let timers = Rc::clone(timers);
            move || {
                splash.borrow_mut().expire();
                let deadline = splash.borrow().exit_deadline_ms();
                if let Some(ms) = deadline {
                    let handle = timers.schedule(ms, move || Self::finish(&splash, &unlocks));
                    *exit_timer.borrow_mut() = Some(Scoped::acquire(handle));
                }
            }
        };
        let expire_timer = Scoped::acquire(timers.schedule(delay, on_expire));

        Self { splash, expire_timer, exit_timer, unlocks }
    }

    fn transition_end(&self) {
        Self::finish(&self.splash, &self.unlocks);
    }

    fn phase(&self) -> SplashPhase {
        self.splash.borrow().phase()
    }
}

#[test]
fn fallback_finishes_exit_without_transition_event() {
    let timers = Rc::new(ManualTimers::default());
    let mounted = MountedSplash::mount(&timers, SplashController::default());

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    assert_eq!(mounted.phase(), SplashPhase::Dismissing);

    let deadline = DEFAULT_SPLASH_DELAY_MS + DEFAULT_SPLASH_EXIT_MS + EXIT_GRACE_MS;
    timers.advance_to(deadline - 1);
    assert_eq!(mounted.phase(), SplashPhase::Dismissing);

    timers.advance_to(deadline);
    assert_eq!(mounted.phase(), SplashPhase::Dismissed);
    assert_eq!(mounted.unlocks.get(), 1);
}

#[test]
fn transition_event_before_fallback_unlocks_once() {
    let timers = Rc::new(ManualTimers::default());
    let mounted = MountedSplash::mount(&timers, SplashController::default());

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    timers.advance_to(DEFAULT_SPLASH_DELAY_MS + DEFAULT_SPLASH_EXIT_MS);
    mounted.transition_end();
    assert_eq!(mounted.phase(), SplashPhase::Dismissed);

    timers.advance_to(10_000);
    mounted.transition_end();
    assert_eq!(mounted.phase(), SplashPhase::Dismissed);
    assert_eq!(mounted.unlocks.get(), 1);
}

#[test]
fn zero_length_exit_schedules_no_fallback() {
    let timers = Rc::new(ManualTimers::default());
    let mounted = MountedSplash::mount(&timers, SplashController::new(DEFAULT_SPLASH_DELAY_MS, 0));

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    assert_eq!(mounted.phase(), SplashPhase::Dismissed);
    assert!(mounted.exit_timer.borrow().is_none());
    assert_eq!(timers.pending(), 0);
}

#[test]
fn teardown_during_fade_cancels_fallback() {
    let timers = Rc::new(ManualTimers::default());
    let mut mounted = MountedSplash::mount(&timers, SplashController::default());

    timers.advance_to(DEFAULT_SPLASH_DELAY_MS);
    assert_eq!(timers.pending(), 1);

    mounted.expire_timer.release();
    if let Some(mut exit) = mounted.exit_timer.borrow_mut().take() {
        exit.release();
    }
    assert_eq!(timers.pending(), 0);

    timers.advance_to(10_000);
    assert_eq!(mounted.phase(), SplashPhase::Dismissing);
    assert_eq!(mounted.unlocks.get(), 0);
}
