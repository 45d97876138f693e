use log::debug;
use serde::Serialize;
use std::{fmt::Display, time::Instant};

use crate::orst::{Metrics, Order, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use zort_bubble::orst::{BubbleSorter, Order, Sorter};
///
/// let mut slice = [5, 1, 4, 2, 8];
/// let metrics = BubbleSorter.sort(&mut slice, Order::Descending);
/// assert_eq!(slice, [8, 5, 4, 2, 1]);
/// assert_eq!(metrics.swaps(), 6);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort, is a simple sorting algorithm that
/// repeatedly steps through the list, compares adjacent elements and swaps them if they are in the
/// wrong order. After pass `i` the `i + 1` largest (or smallest, when descending) elements have
/// "bubbled" to the end of the slice, so every pass can stop one element earlier than the last.
///
/// A pass which does not swap anything proves that the slice is sorted, at which point the sort
/// stops. An already sorted slice therefore costs a single pass of `n - 1` comparisons.
///
/// Equal neighbours are never exchanged so the sort is stable.
///
/// # Algorithm
///
/// ```
/// let mut slice = vec![1, 3, 2, 5, 4];
/// let n = slice.len();
///
/// for pass in 0..n.saturating_sub(1) {
///     let mut swapped = false;
///     for j in 0..(n - pass - 1) {
///         if slice[j] > slice[j + 1] {
///             slice.swap(j, j + 1);
///             swapped = true;
///         }
///     }
///     if !swapped {
///         break;
///     }
/// }
/// # assert_eq!(slice, [1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl BubbleSorter {
    /// Static facts about this sorter.
    pub fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo::default()
    }
}

impl Sorter for BubbleSorter {
    #[inline]
    fn sort(&self, slice: &mut [i32], order: Order) -> Metrics {
        let now = Instant::now();
        let n = slice.len();

        let mut comparisons = 0;
        let mut swaps = 0;

        // Empty and single element slices fall through both loops untouched.
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..(n - pass - 1) {
                comparisons += 1;
                if !order.in_order(slice[j], slice[j + 1]) {
                    slice.swap(j, j + 1);
                    swaps += 1;
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }

        let metrics = Metrics::new(comparisons, swaps, now.elapsed());
        debug!("bubble sorted {n} elements ({order}): {metrics}");
        metrics
    }
}

/// Sort `slice` in place according to `order` using [`BubbleSorter`].
pub fn sort(slice: &mut [i32], order: Order) -> Metrics {
    BubbleSorter.sort(slice, order)
}

/// Sort `slice` in place in ascending order.
pub fn bubble_sort(slice: &mut [i32]) -> Metrics {
    sort(slice, Order::Ascending)
}

/// Descriptive, constant information about the bubble sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub stable: bool,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

impl Default for AlgorithmInfo {
    fn default() -> Self {
        Self {
            name: "Bubble Sort",
            stable: true,
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
        }
    }
}

impl Display for AlgorithmInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AlgorithmInfo{{name='{}', stable={}, time_complexity='{}', space_complexity='{}'}}",
            self.name, self.stable, self.time_complexity, self.space_complexity
        )
    }
}

pub fn algorithm_info() -> AlgorithmInfo {
    AlgorithmInfo::default()
}
