//! The closed set of statistics derived from a target's duration samples.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::Error;

/// A statistic that can be computed over the duration samples of a
/// [`Record`](crate::Record).
///
/// Every statistic is derived fresh from the current sample sequence on each
/// request; nothing is cached. Each statistic also has a string key accepted
/// by [`Record::statistic()`](crate::Record::statistic) for dynamic lookup.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Statistic {
    /// The largest duration observed (key `"max"`).
    Max,

    /// The smallest duration observed (key `"min"`).
    Min,

    /// The arithmetic mean of all durations (key `"mean"`).
    Mean,

    /// The number of durations recorded (key `"nb_call"`).
    CallCount,

    /// The sum of all durations (key `"total_time"`).
    TotalTime,

    /// The most recently recorded duration (key `"last"`).
    Last,
}

impl Statistic {
    /// Every recognized statistic, in documentation order.
    pub const ALL: [Self; 6] = [
        Self::Max,
        Self::Min,
        Self::Mean,
        Self::CallCount,
        Self::TotalTime,
        Self::Last,
    ];

    /// The string key accepted by [`Record::statistic()`](crate::Record::statistic).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
            Self::Mean => "mean",
            Self::CallCount => "nb_call",
            Self::TotalTime => "total_time",
            Self::Last => "last",
        }
    }

    /// Computes this statistic over an ordered sample sequence.
    ///
    /// Statistics that are mathematically undefined on an empty sequence do
    /// not fail; whenever the sequence is empty, every recognized statistic
    /// reads as zero. The guard sits in front of the dispatch so the policy
    /// holds uniformly for the whole set.
    #[must_use]
    pub fn compute(self, samples: &[Duration]) -> StatisticValue {
        if samples.is_empty() {
            return match self {
                Self::CallCount => StatisticValue::Count(0),
                _ => StatisticValue::Time(Duration::ZERO),
            };
        }

        match self {
            Self::Max => StatisticValue::Time(
                samples
                    .iter()
                    .copied()
                    .max()
                    .expect("guarded by the emptiness check"),
            ),
            Self::Min => StatisticValue::Time(
                samples
                    .iter()
                    .copied()
                    .min()
                    .expect("guarded by the emptiness check"),
            ),
            Self::Mean => StatisticValue::Time(mean_of(samples)),
            Self::CallCount => StatisticValue::Count(samples.len()),
            Self::TotalTime => StatisticValue::Time(total_of(samples)),
            Self::Last => StatisticValue::Time(
                samples
                    .last()
                    .copied()
                    .expect("guarded by the emptiness check"),
            ),
        }
    }
}

impl FromStr for Statistic {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "mean" => Ok(Self::Mean),
            "nb_call" => Ok(Self::CallCount),
            "total_time" => Ok(Self::TotalTime),
            "last" => Ok(Self::Last),
            _ => Err(Error::UnknownStatistic {
                key: key.to_string(),
            }),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single computed statistic value.
///
/// Wall-clock statistics are durations; the call count is a plain count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum StatisticValue {
    /// A duration-valued statistic.
    Time(Duration),

    /// A count-valued statistic.
    Count(usize),
}

impl StatisticValue {
    /// The value as fractional seconds; counts convert to their plain number.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "realistic sample counts are far below f64 precision limits"
    )]
    pub fn as_secs_f64(self) -> f64 {
        match self {
            Self::Time(duration) => duration.as_secs_f64(),
            Self::Count(count) => count as f64,
        }
    }

    /// The value as a duration, if this is a duration-valued statistic.
    #[must_use]
    pub fn as_time(self) -> Option<Duration> {
        match self {
            Self::Time(duration) => Some(duration),
            Self::Count(_) => None,
        }
    }

    /// The value as a count, if this is a count-valued statistic.
    #[must_use]
    pub fn as_count(self) -> Option<usize> {
        match self {
            Self::Time(_) => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl fmt::Display for StatisticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time(duration) => write!(f, "{duration:?}"),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

/// Sums an ordered sample sequence.
pub(crate) fn total_of(samples: &[Duration]) -> Duration {
    samples
        .iter()
        .try_fold(Duration::ZERO, |total, sample| total.checked_add(*sample))
        .expect("total recorded time overflows Duration - this indicates an unrealistic scenario")
}

/// Calculates the mean of an ordered sample sequence.
///
/// Returns zero duration if no samples are present. The division happens in
/// integer nanoseconds, so the result is exact down to nanosecond truncation.
pub(crate) fn mean_of(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }

    Duration::from_nanos(
        total_of(samples)
            .as_nanos()
            .checked_div(u128::try_from(samples.len()).expect("usize always fits in u128"))
            .expect("division by zero is guarded by the emptiness check")
            .try_into()
            .expect("mean of realistic durations fits in u64"),
    )
}
