//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides access to the monotonic wall clock.
///
/// A timestamp is the position of the clock relative to an arbitrary
/// per-platform epoch; only the difference between two timestamps from the
/// same platform is meaningful.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// The current position of the monotonic wall clock.
    fn timestamp(&self) -> Duration;
}
