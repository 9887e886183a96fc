//! Wall-clock time tracking utilities for instrumenting and profiling code
//! regions.
//!
//! This package measures the wall-clock execution duration of code regions —
//! whole function calls or explicit blocks — and aggregates the collected
//! durations per named target, so the caller can later query descriptive
//! statistics: minimum, maximum, mean, call count, total, and the most recent
//! value.
//!
//! The core functionality includes:
//! - [`Session`] - Holds the tracking state and provides the measurement
//!   entry points
//! - [`Span`] - Measures a region of code between creation and drop
//! - [`Record`] - Aggregates the duration samples of one named target
//! - [`Report`] - Detached, mergeable snapshot of a session's statistics
//! - [`Statistic`] - The closed set of statistics a record can report
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Simple Usage
//!
//! You can track the wall-clock time of named regions like this:
//!
//! ```
//! use on_the_clock::Session;
//!
//! let session = Session::new();
//!
//! // Measure a block of code under an explicit name.
//! for _ in 0..3 {
//!     let _span = session.open("summing");
//!     let mut sum = 0_u64;
//!     for i in 0..10_000 {
//!         sum += i;
//!     }
//!     std::hint::black_box(sum);
//! }
//!
//! let record = session.record("summing").unwrap();
//! assert_eq!(record.call_count(), 3);
//! println!("mean time of summing = {:?}", record.mean());
//!
//! // Print results for all targets.
//! session.print_to_stdout();
//! ```
//!
//! # Timing Functions
//!
//! Wrapping a function measures every call and files the durations under the
//! function's qualified name:
//!
//! ```
//! use on_the_clock::Session;
//!
//! fn checksum() -> u64 {
//!     (0..1000).sum()
//! }
//!
//! let session = Session::new();
//! let mut timed = session.wrap(checksum);
//!
//! assert_eq!(timed(), 499_500);
//! assert_eq!(timed(), 499_500);
//!
//! let record = session.record_of(&checksum).unwrap();
//! assert_eq!(record.call_count(), 2);
//! ```
//!
//! The duration is recorded on every exit path: a wrapped function that
//! panics still gets its call measured before the panic propagates.
//!
//! # Manual Bracketing
//!
//! When a region does not fit a scope, bracket it explicitly. Starts and
//! stops are matched in stack order, so brackets nest like scopes do:
//!
//! ```
//! use on_the_clock::Session;
//!
//! let session = Session::new();
//!
//! session.start("phase_one");
//! std::hint::black_box((0..1000).sum::<u64>());
//! let elapsed = session.stop().unwrap();
//!
//! assert_eq!(session.record("phase_one").unwrap().last(), elapsed);
//! ```
//!
//! # The Default Target
//!
//! A scope opened without a name files its measurement under
//! [`DEFAULT_TARGET`] — unless another target is already pending, in which
//! case the pending target is reused and nested unnamed scopes collapse onto
//! a single measurement:
//!
//! ```
//! use on_the_clock::{DEFAULT_TARGET, Session};
//!
//! let session = Session::new();
//! {
//!     let _span = session.scope();
//!     std::hint::black_box((0..1000).sum::<u64>());
//! }
//!
//! assert_eq!(session.record(DEFAULT_TARGET).unwrap().call_count(), 1);
//! ```
//!
//! # Threading
//!
//! The tracking types are primarily intended for single-threaded use cases.
//! The pending-target stack is one LIFO per session; concurrent use from
//! multiple threads interleaves starts and stops in ways that pair them
//! meaninglessly. Single-threaded measurement is recommended to ensure
//! meaningful data. [`Report`] snapshots, in contrast, are made to be sent
//! across threads.
//!
//! # Session management
//!
//! Multiple [`Session`] instances can be used concurrently as they track
//! wall-clock time independently. Each session maintains its own set of
//! targets, pending stack, and statistics.

mod error;
mod pal;
mod record;
mod report;
mod session;
mod span;
mod statistic;

pub use error::Error;
pub use record::Record;
pub use report::{Report, ReportTarget};
pub use session::{DEFAULT_TARGET, Session};
pub use span::Span;
pub use statistic::{Statistic, StatisticValue};

pub(crate) const ERR_POISONED_LOCK: &str =
    "failed to acquire lock - the tracking state lock should not be poisoned";
