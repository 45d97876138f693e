use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use zort_bubble::orst::*;

const ORDERS: [Order; 2] = [Order::Ascending, Order::Descending];

struct TestSlices {
    slices: Vec<Vec<i32>>,
}

impl TestSlices {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut slices = vec![vec![], vec![7], vec![2, 1], vec![1, 1, 1, 1]];

        for size in [3, 10, 57, 200] {
            // full range
            slices.push((0..size).map(|_| rng.gen()).collect());
            // lots of duplicates
            slices.push((0..size).map(|_| rng.gen_range(-3..3)).collect());
        }

        TestSlices { slices }
    }
}

// Pairs that are strictly out of order. Every swap of the bubble sort removes exactly one of them.
fn inversions(slice: &[i32], order: Order) -> u64 {
    let mut count = 0;
    for i in 0..slice.len() {
        for j in (i + 1)..slice.len() {
            if !order.in_order(slice[i], slice[j]) {
                count += 1;
            }
        }
    }
    count
}

mod sorting {
    use super::*;

    #[test]
    fn sorted_afterwards() {
        for slice in TestSlices::new().slices {
            for order in ORDERS {
                let mut values = slice.clone();
                sort(&mut values, order);
                assert!(is_sorted(&values, order), "{values:?} ({order})");
            }
        }
    }

    #[test]
    fn permutation_of_input() {
        for slice in TestSlices::new().slices {
            for order in ORDERS {
                let mut values = slice.clone();
                sort(&mut values, order);

                let mut expected = slice.clone();
                expected.sort();
                if order == Order::Descending {
                    expected.reverse();
                }
                assert_eq!(values, expected);
            }
        }
    }

    #[test]
    fn idempotent() {
        for slice in TestSlices::new().slices {
            for order in ORDERS {
                let mut values = slice.clone();
                sort(&mut values, order);
                let once = values.clone();

                let metrics = sort(&mut values, order);
                assert_eq!(values, once);
                assert_eq!(metrics.swaps(), 0);
                assert_eq!(
                    metrics.comparisons(),
                    values.len().saturating_sub(1) as u64
                );
            }
        }
    }

    #[test]
    fn swaps_only_strict_inversions() {
        for slice in TestSlices::new().slices {
            for order in ORDERS {
                let mut values = slice.clone();
                let metrics = sort(&mut values, order);
                assert_eq!(metrics.swaps(), inversions(&slice, order));
            }
        }
    }

    #[test]
    fn examples() {
        let mut values = vec![64, 34, 25, 12, 22, 11, 90];
        sort(&mut values, Order::Ascending);
        assert_eq!(values, vec![11, 12, 22, 25, 34, 64, 90]);

        let mut values = vec![5, 1, 4, 2, 8];
        sort(&mut values, Order::Descending);
        assert_eq!(values, vec![8, 5, 4, 2, 1]);
    }
}

mod metrics {
    use super::*;

    #[test]
    fn best_case() {
        for n in 2..50 {
            let mut values = (0..n).collect::<Vec<i32>>();
            let metrics = bubble_sort(&mut values);
            assert_eq!(metrics.comparisons(), n as u64 - 1);
            assert_eq!(metrics.swaps(), 0);
        }
    }

    #[test]
    fn worst_case() {
        for n in 0..50u64 {
            let mut values = (0..n as i32).rev().collect::<Vec<_>>();
            let metrics = sort(&mut values, Order::Ascending);
            assert_eq!(metrics.comparisons(), n * n.saturating_sub(1) / 2);
            assert_eq!(metrics.swaps(), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn worst_case_descending() {
        let mut values = (0..20).collect::<Vec<i32>>();
        let metrics = sort(&mut values, Order::Descending);
        assert_eq!(metrics.comparisons(), 190);
        assert_eq!(metrics.swaps(), 190);
    }

    #[test]
    fn trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        let metrics = sort(&mut empty, Order::Descending);
        assert_eq!((metrics.comparisons(), metrics.swaps()), (0, 0));

        let mut single = vec![i32::MIN];
        let metrics = sort(&mut single, Order::Ascending);
        assert_eq!(single, vec![i32::MIN]);
        assert_eq!((metrics.comparisons(), metrics.swaps()), (0, 0));
    }
}

mod benchmarking {
    use super::*;

    #[test]
    fn no_iterations() {
        let result = benchmark(500, 0);
        assert_eq!(result.sample_size(), 500);
        assert_eq!(result.average_elapsed(), Duration::ZERO);
    }

    #[test]
    fn empty_slices() {
        for k in [1, 5, 20] {
            let result = benchmark(0, k);
            assert_eq!(result.sample_size(), 0);
        }
    }

    #[test]
    fn sequential_and_parallel_agree_on_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(benchmark_with_rng(128, 4, &mut rng).sample_size(), 128);
        assert_eq!(benchmark_parallel(128, 4).sample_size(), 128);
    }
}

mod boundary {
    use super::*;
    use zort_bubble::orst::interface::SortInput;

    #[test]
    fn execute_then_validate() {
        let response = execute_sort(SortInput::new(vec![9, -3, 9, 0], "desc"));
        let result = validate_sort(&response.sorted_elements, Order::Descending);

        assert!(result.is_sorted);
        assert_eq!(result.sorted_elements, vec![9, 9, 0, -3]);
    }

    #[test]
    fn info_and_health() {
        let info = algorithm_info();
        assert_eq!(info.name, "Bubble Sort");
        assert!(info.stable);

        assert_eq!(health_check().status, "operational");
    }
}
