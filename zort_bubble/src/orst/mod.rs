//! An instrumented [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort) over slices of `i32`
//! along with the tooling around it: metrics, validation, a benchmark driver and the plain value
//! types handed out at the boundary of the library.
//!
//! # Example
//!
//! ```
//! use zort_bubble::orst::{is_sorted, sort, Order};
//!
//! let mut slice = vec![64, 34, 25, 12, 22, 11, 90];
//! let metrics = sort(&mut slice, Order::Ascending);
//!
//! assert_eq!(vec![11, 12, 22, 25, 34, 64, 90], slice);
//! assert!(is_sorted(&slice, Order::Ascending));
//! assert_eq!(metrics.swaps(), 14);
//! ```

pub mod benchmark;
pub mod interface;
mod metrics;
mod order;
mod sorters;
mod validate;

pub use benchmark::{benchmark, benchmark_parallel, benchmark_with_rng, BenchmarkResult};
pub use interface::{execute_sort, health_check, validate_sort, HealthStatus};
pub use metrics::Metrics;
pub use order::Order;
pub use sorters::bubble_sorter::{algorithm_info, bubble_sort, sort, AlgorithmInfo, BubbleSorter};
pub use validate::is_sorted;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// A sorter works in place on the caller's slice and always reports what it did through
/// [`Metrics`]. Callers that only care about the sorted slice can simply drop the returned value.
pub trait Sorter {
    fn sort(&self, slice: &mut [i32], order: Order) -> Metrics;
}
