//! Wall-clock time tracking reports.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::statistic;

/// Thread-safe wall-clock time tracking report.
///
/// A `Report` contains a detached snapshot of the statistics captured by a
/// [`Session`](crate::Session) and can be safely sent to other threads for
/// processing. Reports can be merged together and processed independently.
///
/// # Examples
///
/// ```
/// use on_the_clock::Session;
///
/// let session = Session::new();
/// {
///     let _span = session.open("hot_path");
///     std::hint::black_box((0..1000).sum::<u64>());
/// }
///
/// let report = session.to_report();
/// // The report can be sent to another thread.
/// report.print_to_stdout();
/// ```
///
/// # Merging reports
///
/// ```
/// use std::time::Duration;
///
/// use on_the_clock::{Report, Session};
///
/// let session1 = Session::new();
/// let session2 = Session::new();
///
/// session1.record_duration("work", Duration::from_millis(10));
/// session2.record_duration("work", Duration::from_millis(20));
///
/// let merged = Report::merge(&session1.to_report(), &session2.to_report());
///
/// let (_name, target) = merged.targets().next().unwrap();
/// assert_eq!(target.call_count(), 2);
/// assert_eq!(target.total_time(), Duration::from_millis(30));
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    targets: HashMap<String, ReportTarget>,
}

/// Wall-clock statistics for a single target in a report.
#[derive(Clone, Debug)]
pub struct ReportTarget {
    samples: Vec<Duration>,
}

impl Report {
    /// Creates an empty report.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Creates a report from per-target sample snapshots.
    #[must_use]
    pub(crate) fn from_samples(targets: HashMap<String, Vec<Duration>>) -> Self {
        let targets = targets
            .into_iter()
            .map(|(name, samples)| (name, ReportTarget { samples }))
            .collect();

        Self { targets }
    }

    /// Merges two reports into a new report.
    ///
    /// The resulting report contains the combined statistics from both input
    /// reports. Targets with the same name have their sample sequences
    /// concatenated as if all measurements had been recorded through a single
    /// session.
    #[must_use]
    pub fn merge(a: &Self, b: &Self) -> Self {
        let mut merged_targets = a.targets.clone();

        for (name, b_target) in &b.targets {
            merged_targets
                .entry(name.clone())
                .and_modify(|a_target| {
                    a_target.samples.extend_from_slice(&b_target.samples);
                })
                .or_insert_with(|| b_target.clone());
        }

        Self {
            targets: merged_targets,
        }
    }

    /// Prints the wall-clock statistics to stdout.
    ///
    /// Prints nothing at all if no measurements were captured. This may
    /// indicate that the session was part of a "list available benchmarks"
    /// probe run instead of some real activity, in which case printing
    /// anything might violate the output protocol the tool is speaking.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }
        println!("{self}");
    }

    /// Whether there is any recorded activity in this report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
            || self
                .targets
                .values()
                .all(|target| target.samples.is_empty())
    }

    /// Returns an iterator over the target names and their statistics.
    ///
    /// This allows programmatic access to the same data that would be printed
    /// by [`print_to_stdout()`](Self::print_to_stdout).
    pub fn targets(&self) -> impl Iterator<Item = (&str, &ReportTarget)> {
        self.targets
            .iter()
            .map(|(name, target)| (name.as_str(), target))
    }
}

impl ReportTarget {
    /// The number of measurements recorded for this target.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.samples.len()
    }

    /// The total wall-clock time across all measurements for this target.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        statistic::total_of(&self.samples)
    }

    /// The mean wall-clock time per measurement; zero when no measurements
    /// exist.
    #[must_use]
    pub fn mean(&self) -> Duration {
        statistic::mean_of(&self.samples)
    }

    /// The largest measurement; zero when no measurements exist.
    #[must_use]
    pub fn max(&self) -> Duration {
        self.samples.iter().copied().max().unwrap_or(Duration::ZERO)
    }

    /// The smallest measurement; zero when no measurements exist.
    #[must_use]
    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or(Duration::ZERO)
    }

    /// The most recent measurement; zero when no measurements exist.
    #[must_use]
    pub fn last(&self) -> Duration {
        self.samples.last().copied().unwrap_or(Duration::ZERO)
    }
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} (mean), {:?} (min), {:?} (max), {} calls",
            self.mean(),
            self.min(),
            self.max(),
            self.call_count()
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No wall-clock time statistics captured.")?;
        } else {
            writeln!(f, "Wall-clock time statistics:")?;
            // Sort targets by name for consistent output.
            let mut sorted_targets: Vec<_> = self.targets.iter().collect();
            sorted_targets.sort_by_key(|(name, _)| *name);
            for (name, target) in sorted_targets {
                writeln!(f, "  {name}: {target}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Session;
    use crate::pal::{FakePlatform, PlatformFacade};

    fn create_test_session() -> Session {
        let fake_platform = FakePlatform::new();
        Session::with_platform(PlatformFacade::fake(fake_platform))
    }

    #[test]
    fn new_report_is_empty() {
        let report = Report::new();
        assert!(report.is_empty());
    }

    #[test]
    fn report_from_empty_session_is_empty() {
        let session = create_test_session();
        let report = session.to_report();
        assert!(report.is_empty());
    }

    #[test]
    fn report_from_session_with_measurements_is_not_empty() {
        let session = create_test_session();
        session.record_duration("test", Duration::from_millis(1));

        let report = session.to_report();
        assert!(!report.is_empty());
    }

    #[test]
    fn report_is_a_detached_snapshot() {
        let session = create_test_session();
        session.record_duration("test", Duration::from_millis(1));

        let report = session.to_report();
        session.record_duration("test", Duration::from_millis(2));

        let (_name, target) = report.targets().next().unwrap();
        assert_eq!(target.call_count(), 1);
    }

    #[test]
    fn merge_empty_reports() {
        let merged = Report::merge(&Report::new(), &Report::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_empty_with_non_empty() {
        let session = create_test_session();
        session.record_duration("test", Duration::from_millis(1));

        let report1 = Report::new();
        let report2 = session.to_report();

        let merged1 = Report::merge(&report1, &report2);
        let merged2 = Report::merge(&report2, &report1);

        assert!(!merged1.is_empty());
        assert!(!merged2.is_empty());
    }

    #[test]
    fn merge_different_targets() {
        let session1 = create_test_session();
        let session2 = create_test_session();

        session1.record_duration("test1", Duration::from_millis(1));
        session2.record_duration("test2", Duration::from_millis(2));

        let merged = Report::merge(&session1.to_report(), &session2.to_report());

        assert_eq!(merged.targets.len(), 2);
        assert!(merged.targets.contains_key("test1"));
        assert!(merged.targets.contains_key("test2"));
    }

    #[test]
    fn merge_same_targets_concatenates_samples() {
        let session1 = create_test_session();
        let session2 = create_test_session();

        for _ in 0..5 {
            session1.record_duration("test", Duration::from_millis(10));
        }
        for _ in 0..3 {
            session2.record_duration("test", Duration::from_millis(20));
        }

        let merged = Report::merge(&session1.to_report(), &session2.to_report());

        assert_eq!(merged.targets.len(), 1);
        let merged_target = merged.targets.get("test").unwrap();
        assert_eq!(merged_target.call_count(), 8); // 5 + 3
        assert_eq!(merged_target.total_time(), Duration::from_millis(110));
    }

    #[test]
    fn target_statistics_match_the_samples() {
        let target = ReportTarget {
            samples: vec![
                Duration::from_millis(100),
                Duration::from_millis(300),
                Duration::from_millis(200),
            ],
        };

        assert_eq!(target.call_count(), 3);
        assert_eq!(target.total_time(), Duration::from_millis(600));
        assert_eq!(target.mean(), Duration::from_millis(200));
        assert_eq!(target.min(), Duration::from_millis(100));
        assert_eq!(target.max(), Duration::from_millis(300));
        assert_eq!(target.last(), Duration::from_millis(200));
    }

    #[test]
    fn display_sorts_targets_by_name() {
        let session = create_test_session();
        session.record_duration("zebra", Duration::from_millis(1));
        session.record_duration("aardvark", Duration::from_millis(2));

        let display = session.to_report().to_string();
        let zebra = display.find("zebra").unwrap();
        let aardvark = display.find("aardvark").unwrap();
        assert!(aardvark < zebra);
    }

    #[test]
    fn report_clone() {
        let session = create_test_session();
        session.record_duration("test", Duration::from_millis(1));

        let report1 = session.to_report();
        let report2 = report1.clone();

        assert_eq!(report1.targets.len(), report2.targets.len());
    }

    // Static assertions for thread safety.
    static_assertions::assert_impl_all!(Report: Send, Sync);
    static_assertions::assert_impl_all!(ReportTarget: Send, Sync);
}
