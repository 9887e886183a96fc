//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation lets tests control the clock instead of relying on the
/// operating system. Multiple clones of the same `FakePlatform` share the same
/// underlying time state, allowing tests to move time forward after platform
/// creation to simulate work taking place.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    timestamp: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a new fake platform whose clock sits at zero.
    pub(crate) fn new() -> Self {
        Self {
            timestamp: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the clock to an absolute position.
    ///
    /// This affects all clones of this platform.
    pub(crate) fn set_timestamp(&self, timestamp: Duration) {
        *self
            .timestamp
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = timestamp;
    }

    /// Moves the clock forward by the given amount.
    ///
    /// This affects all clones of this platform.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut timestamp = self
            .timestamp
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        *timestamp = timestamp
            .checked_add(delta)
            .expect("fake clock advanced beyond the maximum Duration");
    }
}

impl Platform for FakePlatform {
    fn timestamp(&self) -> Duration {
        *self
            .timestamp
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_at_zero() {
        let platform = FakePlatform::new();
        assert_eq!(platform.timestamp(), Duration::ZERO);
    }

    #[test]
    fn sets_absolute_timestamps() {
        let platform = FakePlatform::new();
        platform.set_timestamp(Duration::from_millis(150));

        assert_eq!(platform.timestamp(), Duration::from_millis(150));
    }

    #[test]
    fn advances_relative_to_current_position() {
        let platform = FakePlatform::new();
        platform.set_timestamp(Duration::from_millis(100));
        platform.advance(Duration::from_millis(50));

        assert_eq!(platform.timestamp(), Duration::from_millis(150));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Moving time on one clone affects the other.
        platform1.set_timestamp(Duration::from_millis(100));
        assert_eq!(platform2.timestamp(), Duration::from_millis(100));

        platform2.advance(Duration::from_millis(25));
        assert_eq!(platform1.timestamp(), Duration::from_millis(125));
    }
}
