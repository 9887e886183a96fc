//! Wall-clock tracking session state and entry points.

use std::any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;
use crate::pal::{Platform, PlatformFacade};
use crate::{ERR_POISONED_LOCK, Error, Record, Report, Span};

/// The target name used by [`Session::scope()`] when nothing is pending.
pub const DEFAULT_TARGET: &str = "default";

/// Manages wall-clock time tracking state and contains the per-target records.
///
/// A session offers three equivalent ways to measure the elapsed time of a
/// region of code, all feeding the same registry:
///
/// - [`wrap()`](Self::wrap) a function so every call is measured under the
///   function's qualified name;
/// - [`open()`](Self::open) a named [`Span`] (or [`scope()`](Self::scope) for
///   the default name) whose drop records the elapsed time;
/// - bracket a region manually with [`start()`](Self::start) and
///   [`stop()`](Self::stop).
///
/// Targets currently being timed are kept on a LIFO stack, so the three entry
/// points nest freely as long as every start is paired with exactly one stop
/// in stack order.
///
/// # Examples
///
/// ```
/// use on_the_clock::Session;
///
/// let session = Session::new();
///
/// for _ in 0..3 {
///     let _span = session.open("hashing");
///     std::hint::black_box((0..1000).sum::<u64>());
/// }
///
/// let record = session.record("hashing").unwrap();
/// assert_eq!(record.call_count(), 3);
///
/// // Output statistics of all targets to console.
/// session.print_to_stdout();
/// ```
#[derive(Debug)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
    platform: PlatformFacade,
}

/// The shared mutable state of a session: the record registry, the pending
/// target stack, and the measurement origin.
///
/// All measurement entry points bottom out in the same two primitives here:
/// [`push_target`](Self::push_target) and [`pop_and_record`](Self::pop_and_record).
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    records: HashMap<String, Record>,
    insertion_order: Vec<String>,
    pending: Vec<String>,
    origin: Option<Duration>,
}

impl SessionState {
    /// Marks the start of a measurement: pushes the target onto the pending
    /// stack and overwrites the shared origin with `now`.
    ///
    /// With no explicit target, the default target is seeded only when the
    /// stack is empty; otherwise the existing top of the stack is reused and
    /// only the origin moves.
    pub(crate) fn push_target(&mut self, target: Option<String>, now: Duration) {
        match target {
            Some(name) => self.pending.push(name),
            None => {
                if self.pending.is_empty() {
                    self.pending.push(DEFAULT_TARGET.to_string());
                }
            }
        }

        self.origin = Some(now);
    }

    /// Completes the most recently started measurement: pops the stack top
    /// and records `now - origin` under the popped name.
    ///
    /// Returns the popped name and the recorded duration, or `None` when
    /// nothing was pending.
    pub(crate) fn pop_and_record(&mut self, now: Duration) -> Option<(String, Duration)> {
        let target = self.pending.pop()?;
        let origin = self
            .origin
            .expect("a pending target always has a start timestamp");

        let duration = now.saturating_sub(origin);
        self.append_duration(&target, duration);

        Some((target, duration))
    }

    /// Appends a duration to the target's record, creating the record the
    /// first time the target is seen.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Record += appends a sample; it cannot overflow or panic"
    )]
    pub(crate) fn append_duration(&mut self, target: &str, duration: Duration) {
        if !self.records.contains_key(target) {
            self.insertion_order.push(target.to_string());
            self.records
                .insert(target.to_string(), Record::new(target));
        }

        let record = self
            .records
            .get_mut(target)
            .expect("inserted above when absent");
        *record += duration;
    }
}

impl Session {
    /// Creates a new wall-clock tracking session over the real monotonic
    /// clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use on_the_clock::Session;
    ///
    /// let session = Session::new();
    /// assert!(session.is_empty());
    /// ```
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default session' that is not actually a default session"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            platform: PlatformFacade::real(),
        }
    }

    /// Creates a new session with a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake
    /// clock that does not rely on the operating system.
    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            platform,
        }
    }

    /// Retrieves the record of a named target.
    ///
    /// # Errors
    ///
    /// Returns an error when the target has never been measured.
    pub fn record(&self, target: &str) -> Result<Record> {
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .records
            .get(target)
            .cloned()
            .ok_or_else(|| Error::UnknownTarget {
                target: target.to_string(),
            })
    }

    /// Retrieves the record of a wrapped function, deriving its name the same
    /// way [`wrap()`](Self::wrap) does.
    ///
    /// # Errors
    ///
    /// Returns an error when the function has never been measured.
    ///
    /// # Examples
    ///
    /// ```
    /// use on_the_clock::Session;
    ///
    /// fn checksum() -> u64 {
    ///     (0..1000).sum()
    /// }
    ///
    /// let session = Session::new();
    /// let mut timed = session.wrap(checksum);
    ///
    /// assert_eq!(timed(), 499_500);
    /// assert_eq!(timed(), 499_500);
    ///
    /// let record = session.record_of(&checksum).unwrap();
    /// assert_eq!(record.call_count(), 2);
    /// ```
    pub fn record_of<F>(&self, _func: &F) -> Result<Record> {
        self.record(any::type_name::<F>())
    }

    /// Records one duration for a named target, creating its record the first
    /// time the target is seen.
    pub fn record_duration(&self, target: impl Into<String>, duration: Duration) {
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .append_duration(&target.into(), duration);
    }

    /// All records collected so far, in insertion order of first-seen target
    /// names.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        let state = self.state.lock().expect(ERR_POISONED_LOCK);

        state
            .insertion_order
            .iter()
            .map(|name| {
                state
                    .records
                    .get(name)
                    .expect("every ordered name has a record")
                    .clone()
            })
            .collect()
    }

    /// Wraps a function so that every call is measured and recorded under the
    /// function's qualified name.
    ///
    /// The duration is recorded on every exit path: when the wrapped function
    /// panics, the measurement is still stored and the panic then propagates
    /// unchanged.
    #[must_use]
    pub fn wrap<F, R>(&self, mut func: F) -> impl FnMut() -> R + use<F, R>
    where
        F: FnMut() -> R,
    {
        let name = any::type_name::<F>();
        let state = Arc::clone(&self.state);
        let platform = self.platform.clone();

        move || {
            let _span = Span::enter(
                Arc::clone(&state),
                platform.clone(),
                Some(name.to_string()),
            );
            func()
        }
    }

    /// Begins a named measured span; the elapsed time is recorded when the
    /// returned [`Span`] is dropped.
    pub fn open(&self, target: impl Into<String>) -> Span {
        Span::enter(
            Arc::clone(&self.state),
            self.platform.clone(),
            Some(target.into()),
        )
    }

    /// Begins a measured span without naming a target.
    ///
    /// When nothing is pending, the span is recorded under
    /// [`DEFAULT_TARGET`]. When a target is already pending (nested use), no
    /// new target is pushed: the existing top of the stack is reused, so
    /// nested unnamed scopes collapse onto a single measurement.
    pub fn scope(&self) -> Span {
        Span::enter(Arc::clone(&self.state), self.platform.clone(), None)
    }

    /// Begins a measurement of the named target without returning a handle.
    ///
    /// Pair each `start` with exactly one [`stop()`](Self::stop); pending
    /// targets are matched in stack order.
    ///
    /// # Examples
    ///
    /// ```
    /// use on_the_clock::Session;
    ///
    /// let session = Session::new();
    ///
    /// session.start("phase_one");
    /// std::hint::black_box((0..1000).sum::<u64>());
    /// let elapsed = session.stop().unwrap();
    ///
    /// assert_eq!(session.record("phase_one").unwrap().last(), elapsed);
    /// ```
    pub fn start(&self, target: impl Into<String>) {
        let now = self.platform.timestamp();
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .push_target(Some(target.into()), now);
    }

    /// Completes the most recently started measurement and returns the
    /// recorded duration.
    ///
    /// # Errors
    ///
    /// Returns an error when no measurement is in progress.
    pub fn stop(&self) -> Result<Duration> {
        let now = self.platform.timestamp();
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .pop_and_record(now)
            .map(|(_, duration)| duration)
            .ok_or(Error::NothingPending)
    }

    /// Whether there is any recorded activity in this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let state = self.state.lock().expect(ERR_POISONED_LOCK);

        state.records.is_empty()
            || state
                .records
                .values()
                .all(|record| record.call_count() == 0)
    }

    /// Creates a thread-safe report from this session.
    ///
    /// The report is a detached snapshot of all statistics captured so far.
    /// Reports can be sent to other threads and merged with other reports.
    #[must_use]
    pub fn to_report(&self) -> Report {
        let state = self.state.lock().expect(ERR_POISONED_LOCK);

        let targets: HashMap<String, Vec<Duration>> = state
            .records
            .iter()
            .map(|(name, record)| (name.clone(), record.samples()))
            .collect();

        Report::from_samples(targets)
    }

    /// Prints the wall-clock statistics of all targets to stdout.
    ///
    /// This is a convenience method equivalent to
    /// `self.to_report().print_to_stdout()`. Prints nothing at all if no
    /// measurements were captured.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.to_report().print_to_stdout();
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Report's Display implementation for consistency.
        write!(f, "{}", self.to_report())
    }
}
