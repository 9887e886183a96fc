use thiserror::Error;

/// Errors that can occur when querying or controlling a tracking session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller looked up a target that has never been measured.
    #[error("no timings recorded for target '{target}'")]
    UnknownTarget {
        /// The target name that was looked up.
        target: String,
    },

    /// The caller requested a stop while no timing was in progress.
    #[error("cannot stop timing: no target is currently being timed")]
    NothingPending,

    /// The caller requested a statistic key outside the recognized set.
    #[error("Record has no statistic named '{key}'")]
    UnknownStatistic {
        /// The statistic key that was requested.
        key: String,
    },
}

/// A specialized `Result` type for tracking operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
