//! Timing the bubble sort over freshly generated random slices.
//!
//! Every iteration allocates its own slice, fills it with values drawn from the whole `i32` range
//! and sorts it ascending. Nothing carries over between iterations, which is also what allows
//! [`benchmark_parallel`] to hand each of them to a different thread.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, trace};
use prettytable::{row, Table};
use rand::Rng;
use rayon::prelude::*;
use serde::{Serialize, Serializer};
use std::{fmt::Display, time::Duration};

use super::{BubbleSorter, Order, Sorter};

/// Average time taken to sort slices of `sample_size` random elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    #[serde(rename = "array_size")]
    sample_size: usize,

    #[serde(rename = "average_time_ns", serialize_with = "as_nanos")]
    average_elapsed: Duration,
}

impl BenchmarkResult {
    fn new(sample_size: usize, average_elapsed: Duration) -> Self {
        Self {
            sample_size,
            average_elapsed,
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn average_elapsed(&self) -> Duration {
        self.average_elapsed
    }
}

fn as_nanos<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u128(duration.as_nanos())
}

impl Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BenchmarkResult{{array_size={}, average_time_ns={} ns}}",
            self.sample_size,
            self.average_elapsed.as_nanos()
        )
    }
}

// One iteration: a brand new slice, sorted ascending.
fn single_run<R: Rng>(size: usize, rng: &mut R) -> Duration {
    let mut values: Vec<i32> = (0..size).map(|_| rng.gen()).collect();
    let elapsed = BubbleSorter.sort(&mut values, Order::Ascending).elapsed();
    trace!("sorted {size} random elements in {elapsed:?}");
    elapsed
}

fn average(total: Duration, iterations: usize) -> Duration {
    if iterations == 0 {
        return Duration::ZERO;
    }

    let nanos = total.as_nanos() / iterations as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Run `iterations` sorts of `size` random elements and report the mean time taken.
///
/// With zero iterations nothing is sorted and the average is zero.
///
/// ```
/// use std::time::Duration;
/// use zort_bubble::orst::benchmark;
///
/// let result = benchmark(100, 0);
/// assert_eq!(result.sample_size(), 100);
/// assert_eq!(result.average_elapsed(), Duration::ZERO);
/// ```
pub fn benchmark(size: usize, iterations: usize) -> BenchmarkResult {
    benchmark_with_rng(size, iterations, &mut rand::thread_rng())
}

/// Same as [`benchmark`] but draws the random elements from `rng`, which makes the generated
/// slices reproducible with a seeded generator.
pub fn benchmark_with_rng<R: Rng>(size: usize, iterations: usize, rng: &mut R) -> BenchmarkResult {
    let total: Duration = (0..iterations).map(|_| single_run(size, rng)).sum();

    let result = BenchmarkResult::new(size, average(total, iterations));
    debug!("benchmark of {iterations} iterations finished: {result}");
    result
}

/// Same as [`benchmark`] but spreads the iterations over the rayon thread pool.
///
/// Each worker draws from its own thread local generator and the per iteration durations are
/// summed by rayon's reduction.
pub fn benchmark_parallel(size: usize, iterations: usize) -> BenchmarkResult {
    let total: Duration = (0..iterations)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, _| single_run(size, rng))
        .sum();

    let result = BenchmarkResult::new(size, average(total, iterations));
    debug!("parallel benchmark of {iterations} iterations finished: {result}");
    result
}

/// Benchmark on the terminal: shows a progress bar while sorting and prints a summary table.
pub fn run_benchmark(size: usize, iterations: usize, parallel: bool) -> BenchmarkResult {
    println!(
        "{} {}",
        "List Size ->".bold().underline().blue(),
        size.to_string().bold()
    );
    println!(
        "{} {}",
        "Iterations ->".bold().underline().blue(),
        iterations.to_string().bold()
    );

    let result = if parallel {
        benchmark_parallel(size, iterations)
    } else {
        let pb = ProgressBar::new(iterations as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "Bubble Sort -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Iteration: ({pos}/{len}, ETA: {eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut rng = rand::thread_rng();
        let mut total = Duration::ZERO;
        for _ in 0..iterations {
            total += single_run(size, &mut rng);
            pb.inc(1);
        }
        pb.finish_and_clear();

        BenchmarkResult::new(size, average(total, iterations))
    };

    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Mode".bold(),
        "Average Time".bold()
    ]);

    let mode = if parallel { "Parallel" } else { "Sequential" };
    if iterations == 0 {
        table.add_row(row!["Bubble Sort", mode, "Nothing To Do".red()]);
    } else {
        table.add_row(row![
            "Bubble Sort",
            mode,
            format!("{:?}", result.average_elapsed())
        ]);
    }

    table.printstd();
    println!();

    result
}
