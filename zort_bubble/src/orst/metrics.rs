use serde::{Serialize, Serializer};
use std::{fmt::Display, time::Duration};

/// What a single sort did to its slice.
///
/// Produced once per call to [`Sorter::sort`](super::Sorter::sort) and never changed afterwards,
/// hence the lack of setters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    #[serde(rename = "comparison_count")]
    comparisons: u64,

    #[serde(rename = "swap_count")]
    swaps: u64,

    #[serde(rename = "execution_time_ns", serialize_with = "as_nanos")]
    elapsed: Duration,
}

impl Metrics {
    pub(crate) fn new(comparisons: u64, swaps: u64, elapsed: Duration) -> Self {
        Self {
            comparisons,
            swaps,
            elapsed,
        }
    }

    /// Number of times two adjacent elements were compared.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of times two adjacent elements were exchanged.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Wall clock time spent inside the sort.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

fn as_nanos<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u128(duration.as_nanos())
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SortMetrics{{comparison_count={}, swap_count={}, execution_time_ns={} ns}}",
            self.comparisons,
            self.swaps,
            self.elapsed.as_nanos()
        )
    }
}
