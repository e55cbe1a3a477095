//! Probe outcome records and the per-run sample log.

use serde::{Deserialize, Serialize};

use super::point::GridPoint;

/// A probed location and its measured outcome.
///
/// `seen` is immutable once recorded: each probe gets exactly one response
/// (acknowledgment or timeout) before the next probe is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Grid cell that was probed
    pub point: GridPoint,
    /// Whether the user acknowledged the probe before the deadline
    pub seen: bool,
}

impl Sample {
    /// Create a new sample record
    #[inline]
    pub fn new(point: GridPoint, seen: bool) -> Self {
        Self { point, seen }
    }
}

/// Seen/unseen counts over a quadrant run, for the results display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Total points tested
    pub total: usize,
    /// Points acknowledged before the deadline
    pub seen: usize,
    /// Points that timed out (candidate blind spots)
    pub unseen: usize,
}

/// Append-only ordered log of tested points.
///
/// Used for live rendering and the seen/unseen summary. The selection
/// algorithm never consults the log directly; it works off the location
/// ledger and the visibility boundary derived from the same responses.
#[derive(Clone, Debug, Default)]
pub struct SampleLog {
    samples: Vec<Sample>,
}

impl SampleLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample
    pub fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Is the log empty?
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Iterate samples in test order
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Samples as a slice, in test order
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Discard all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Seen/unseen counts
    pub fn summary(&self) -> SessionSummary {
        let seen = self.samples.iter().filter(|s| s.seen).count();
        SessionSummary {
            total: self.samples.len(),
            seen,
            unseen: self.samples.len() - seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut log = SampleLog::new();
        log.record(Sample::new(GridPoint::new(1, 1), true));
        log.record(Sample::new(GridPoint::new(2, 2), false));
        log.record(Sample::new(GridPoint::new(3, 3), false));

        let summary = log.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.seen, 1);
        assert_eq!(summary.unseen, 2);
    }

    #[test]
    fn test_log_preserves_order() {
        let mut log = SampleLog::new();
        for i in 0..5 {
            log.record(Sample::new(GridPoint::new(i, 0), i % 2 == 0));
        }
        let xs: Vec<i32> = log.iter().map(|s| s.point.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4]);
        assert_eq!(log.last().unwrap().point.x, 4);
    }

    #[test]
    fn test_clear() {
        let mut log = SampleLog::new();
        log.record(Sample::new(GridPoint::new(1, 1), true));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.summary(), SessionSummary::default());
    }
}
