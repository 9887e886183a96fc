//! Real platform implementation backed by the operating system clock.

use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Monotonic wall clock backed by [`std::time::Instant`].
///
/// The epoch is captured when the platform is created. Copies carry the epoch
/// by value, so every copy reports timestamps on the same timeline.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RealPlatform {
    epoch: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn timestamp(&self) -> Duration {
        self.epoch.elapsed()
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
mod tests {
    use super::*;

    #[test]
    fn timestamps_never_run_backwards() {
        let platform = RealPlatform::new();

        let first = platform.timestamp();
        let second = platform.timestamp();

        assert!(second >= first);
    }

    #[test]
    fn copies_share_the_epoch() {
        let platform = RealPlatform::new();
        let copy = platform;

        let original = platform.timestamp();
        let copied = copy.timestamp();

        // Both readings sit on the same timeline, so they stay close together.
        assert!(copied.saturating_sub(original) < Duration::from_secs(1));
    }
}
