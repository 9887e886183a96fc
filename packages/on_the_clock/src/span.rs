//! Scoped wall-clock measurement guards.

use std::sync::{Arc, Mutex};

use crate::ERR_POISONED_LOCK;
use crate::pal::{Platform, PlatformFacade};
use crate::session::SessionState;

/// A measured span of code: timing starts when the span is created and the
/// elapsed duration is recorded when it is dropped.
///
/// Creation pushes the target name onto the session's pending stack and marks
/// the measurement origin; drop pops the stack top and records the elapsed
/// time under the popped name. Because the recording happens in `Drop`, it
/// runs on every exit path from the measured region, including unwinding —
/// a panicking region still gets its duration recorded before the panic
/// continues.
///
/// Pending targets are matched LIFO: the name popped at drop is whichever was
/// pushed most recently. Spans dropped out of creation order therefore
/// attribute durations to each other's targets; pair every span with exactly
/// one region to keep attributions straight.
///
/// # Examples
///
/// ```
/// use on_the_clock::Session;
///
/// let session = Session::new();
/// {
///     let _span = session.open("sum");
///     std::hint::black_box((0..10_000).sum::<u64>());
/// } // The elapsed time is recorded under "sum" here.
///
/// assert_eq!(session.record("sum").unwrap().call_count(), 1);
/// ```
#[derive(Debug)]
#[must_use = "measurements are taken between creation and drop"]
pub struct Span {
    state: Arc<Mutex<SessionState>>,
    platform: PlatformFacade,
}

impl Span {
    /// Begins a measurement: pushes the target (or seeds the default target
    /// when no explicit name is given and nothing is pending) and marks the
    /// origin timestamp.
    pub(crate) fn enter(
        state: Arc<Mutex<SessionState>>,
        platform: PlatformFacade,
        target: Option<String>,
    ) -> Self {
        let now = platform.timestamp();
        state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .push_target(target, now);

        Self { state, platform }
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        let now = self.platform.timestamp();
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);

        // Misused interleaving (nested default scopes, out-of-order drops) can
        // leave the stack empty by the time this span closes. A destructor has
        // no way to surface that, so the drop records nothing in that case.
        state.pop_and_record(now);
    }
}
