// File: crates/meteogram-core/src/sample.rs
// Summary: Observation sample model and the ordered series it lives in.
// Notes:
// - Downstream algorithms (bisection, curve drawing) assume ascending
//   timestamps. `from_sorted` trusts the caller; `try_from_samples`
//   verifies the ordering for callers that want it checked.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// One weather observation: an instant and the value measured at it.
/// Immutable once received; the chart only derives pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub at: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub const fn new(at: DateTime<Utc>, value: f64) -> Self {
        Self { at, value }
    }
}

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("sample at index {index} is earlier than its predecessor")]
    OutOfOrder { index: usize },
}

/// A time-ordered sequence of samples.
#[derive(Clone, Debug, Default)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Wrap samples the caller guarantees are sorted ascending by timestamp.
    pub fn from_sorted(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Wrap samples, verifying the ascending-timestamp contract.
    pub fn try_from_samples(samples: Vec<Sample>) -> Result<Self, SeriesError> {
        for (i, pair) in samples.windows(2).enumerate() {
            if pair[1].at < pair[0].at {
                return Err(SeriesError::OutOfOrder { index: i + 1 });
            }
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn get(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }
    pub fn first(&self) -> Option<&Sample> { self.samples.first() }
    pub fn last(&self) -> Option<&Sample> { self.samples.last() }

    /// Earliest and latest timestamps, or `None` when empty.
    pub fn time_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.samples.first()?.at, self.samples.last()?.at))
    }

    /// Smallest and largest values, or `None` when empty.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for s in &self.samples {
            min = min.min(s.value);
            max = max.max(s.value);
        }
        if min.is_finite() && max.is_finite() { Some((min, max)) } else { None }
    }

    /// Leftmost index whose sample is not earlier than `t`; equivalently the
    /// insertion point of `t` preserving ascending order. O(log n).
    pub fn bisect_left(&self, t: DateTime<Utc>) -> usize {
        self.samples.partition_point(|s| s.at < t)
    }

    /// The "nearest" sample under the left-bisection rule: the first sample
    /// not earlier than `t`, clamped to the last valid index at the upper
    /// boundary. Note this is not the closest sample in absolute time
    /// distance; the left neighbor is never consulted.
    pub fn nearest_index(&self, t: DateTime<Utc>) -> Option<usize> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.bisect_left(t).min(self.samples.len() - 1))
    }
}
