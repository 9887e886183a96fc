//! Per-target duration samples and derived statistics.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Result;
use crate::{ERR_POISONED_LOCK, Statistic, StatisticValue, statistic};

/// Owns the ordered duration samples of one named target and computes
/// descriptive statistics over them on demand.
///
/// A `Record` is a cheap cloneable handle; every clone observes the same live
/// sample sequence. Samples are kept in insertion order, which is the
/// chronological order of completed measurements; appending is the only
/// mutation. Statistics are never cached, so they always reflect the current
/// samples.
///
/// Statistics that are undefined on an empty record (`max`, `min`, `mean`,
/// `last`) read as zero until the first sample arrives.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use on_the_clock::Session;
///
/// let session = Session::new();
/// session.record_duration("step", Duration::from_millis(100));
/// session.record_duration("step", Duration::from_millis(300));
/// session.record_duration("step", Duration::from_millis(200));
///
/// let record = session.record("step").unwrap();
/// assert_eq!(record.call_count(), 3);
/// assert_eq!(record.max(), Duration::from_millis(300));
/// assert_eq!(record.mean(), Duration::from_millis(200));
/// assert_eq!(record.last(), Duration::from_millis(200));
/// ```
#[derive(Clone, Debug)]
pub struct Record {
    name: String,
    samples: Arc<Mutex<Vec<Duration>>>,
}

impl Record {
    /// Creates an empty record labeled with the given target name.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The label of the measured target.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends one sample to the end of the sequence.
    ///
    /// The value is stored as given; callers are expected to pass elapsed
    /// time, but the record does not validate magnitude.
    pub fn append(&self, duration: Duration) {
        self.samples
            .lock()
            .expect(ERR_POISONED_LOCK)
            .push(duration);
    }

    /// A snapshot of the raw sample sequence, in chronological order.
    #[must_use]
    pub fn samples(&self) -> Vec<Duration> {
        self.samples.lock().expect(ERR_POISONED_LOCK).clone()
    }

    /// The number of samples recorded so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.samples.lock().expect(ERR_POISONED_LOCK).len()
    }

    /// The sum of all samples; zero when no samples exist.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.with_samples(statistic::total_of)
    }

    /// The largest sample observed; zero when no samples exist.
    #[must_use]
    pub fn max(&self) -> Duration {
        self.with_samples(|samples| samples.iter().copied().max().unwrap_or(Duration::ZERO))
    }

    /// The smallest sample observed; zero when no samples exist.
    #[must_use]
    pub fn min(&self) -> Duration {
        self.with_samples(|samples| samples.iter().copied().min().unwrap_or(Duration::ZERO))
    }

    /// The arithmetic mean of all samples; zero when no samples exist.
    #[must_use]
    pub fn mean(&self) -> Duration {
        self.with_samples(statistic::mean_of)
    }

    /// The most recently appended sample; zero when no samples exist.
    #[must_use]
    pub fn last(&self) -> Duration {
        self.with_samples(|samples| samples.last().copied().unwrap_or(Duration::ZERO))
    }

    /// Looks up a statistic by its string key.
    ///
    /// Recognized keys are `"max"`, `"min"`, `"mean"`, `"nb_call"`,
    /// `"total_time"`, and `"last"`. Any other key fails with
    /// [`Error::UnknownStatistic`](crate::Error::UnknownStatistic); a
    /// recognized key on an empty record reads as zero.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is not in the recognized set.
    pub fn statistic(&self, key: &str) -> Result<StatisticValue> {
        let stat: Statistic = key.parse()?;
        Ok(self.with_samples(|samples| stat.compute(samples)))
    }

    fn with_samples<T>(&self, f: impl FnOnce(&[Duration]) -> T) -> T {
        f(&self.samples.lock().expect(ERR_POISONED_LOCK))
    }
}

/// Pure combine: the sample sequence with one more value appended, as a
/// detached copy. The record itself is not mutated.
impl Add<Duration> for &Record {
    type Output = Vec<Duration>;

    fn add(self, duration: Duration) -> Vec<Duration> {
        let mut samples = self.samples();
        samples.push(duration);
        samples
    }
}

/// Mutating combine: appends the value to the record's sample sequence. This
/// is the operation the session registry uses to store new measurements.
impl AddAssign<Duration> for Record {
    fn add_assign(&mut self, duration: Duration) {
        self.append(duration);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record '{}': {:?} (mean) across {} calls",
            self.name,
            self.mean(),
            self.call_count()
        )
    }
}
