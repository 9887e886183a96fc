//! Facade that dispatches platform calls to the real or fake implementation.

use std::time::Duration;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Dispatches wall-clock access to either the real platform or a fake one
/// injected by a test.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    /// The operating system monotonic clock.
    Real(RealPlatform),

    /// A test-controlled clock.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Creates a facade over the real monotonic clock, with its epoch set to now.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform::new())
    }

    /// Creates a facade over a test-controlled clock.
    #[cfg(test)]
    pub(crate) fn fake(fake: FakePlatform) -> Self {
        Self::Fake(fake)
    }
}

impl Platform for PlatformFacade {
    fn timestamp(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.timestamp(),
            #[cfg(test)]
            Self::Fake(platform) => platform.timestamp(),
        }
    }
}
