//! # Introduction
//!
//! An instrumented bubble sort over `i32` slices. See the [`orst`] module for the library and
//! [`BubbleArgs`] for the command line front end.

pub mod orst;

use clap::{Args, Subcommand};
use colored::Colorize;
use orst::{
    algorithm_info, benchmark::run_benchmark, bubble_sort, execute_sort, health_check, is_sorted,
    interface::SortInput, sort, validate_sort, Order,
};

/// Sort, validate and benchmark on the command line. Run `zort bubble --help` to see what options
/// are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct BubbleArgs {
    #[command(subcommand)]
    command: BubbleCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum BubbleCommands {
    /// Walk through a fixed set of examples, edge cases included.
    Demo,

    /// Average the time taken to sort random slices.
    Bench {
        /// Number of elements in every random slice.
        #[arg(default_value_t = 1000)]
        size: usize,

        /// Number of slices to sort.
        #[arg(default_value_t = 10)]
        iterations: usize,

        /// Sort the slices on all available cores.
        #[arg(long)]
        parallel: bool,
    },

    /// Sort the given integers.
    Sort {
        /// Integers to sort.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,

        /// `asc` or `desc`. Anything else sorts ascending.
        #[arg(short, long, default_value_t = String::from("asc"))]
        order: String,
    },

    /// Print the algorithm's properties.
    Info,

    /// Print the health of the sorter as json.
    Health,
}

impl BubbleArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            BubbleCommands::Demo => demo()?,

            BubbleCommands::Bench {
                size,
                iterations,
                parallel,
            } => {
                let result = run_benchmark(size, iterations, parallel);
                println!("{} {result}", "Result:".bold().green());
            }

            BubbleCommands::Sort { mut values, order } => {
                let order = Order::from(order.as_str());
                let metrics = sort(&mut values, order);

                println!("{} {values:?}", format!("Sorted ({order}):").bold().green());
                println!("{} {metrics}", "Metrics:".bold().green());
            }

            BubbleCommands::Info => println!("{}", algorithm_info()),

            BubbleCommands::Health => {
                println!("{}", serde_json::to_string_pretty(&health_check())?)
            }
        }
        Ok(())
    }
}

fn header(title: &str) {
    println!("\n{}", format!("[{title}]").bold().underline().blue());
}

fn demo() -> anyhow::Result<()> {
    println!("{}", "=== Bubble Sort ===".bold().magenta());

    header("Standard Sorting");
    let mut values = vec![64, 34, 25, 12, 22, 11, 90];
    println!("Original:  {values:?}");

    let before = values.as_ptr();
    let metrics = bubble_sort(&mut values);
    let in_place = if before == values.as_ptr() {
        "PASSED (same buffer)".green()
    } else {
        "FAILED (different buffer)".red()
    };

    println!("Sorted:    {values:?}");
    println!("In-place:  {in_place}");
    println!("Metrics:   {metrics}");
    println!("Is sorted: {}", is_sorted(&values, Order::Ascending));

    header("Descending Sort And Validation");
    let input = SortInput::new(vec![5, 1, 4, 2, 8], Order::Descending);
    println!("Input:     {:?} (DESC)", input.elements);

    let response = execute_sort(input);
    println!("Sorted:    {:?}", response.sorted_elements);
    println!("Metrics:   {}", response.metrics);

    let validation = validate_sort(&response.sorted_elements, Order::Descending);
    println!("Validated: {}", serde_json::to_string(&validation)?);

    header("Edge Cases");
    let mut empty: Vec<i32> = vec![];
    let metrics = bubble_sort(&mut empty);
    println!("Empty:     {empty:?} -> {metrics}");

    let mut single = vec![42];
    let metrics = bubble_sort(&mut single);
    println!("Single:    {single:?} -> {metrics}");

    let mut garbage = vec![3, 1, 2];
    let metrics = sort(&mut garbage, Order::from("sideways"));
    println!("Bad order: {garbage:?} -> {metrics}");

    header("Algorithm");
    println!("Info:      {}", algorithm_info());
    println!("Health:    {}", serde_json::to_string(&health_check())?);

    header("Default Benchmark");
    let result = run_benchmark(100, 10, false);
    println!("{} {result}", "Result:".bold().green());

    println!(
        "\nTip: run `zort bubble bench [SIZE] [ITERATIONS]` for custom benchmarks."
    );
    Ok(())
}
