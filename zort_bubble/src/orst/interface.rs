//! Plain value types for callers embedding the sorter behind some other interface (an RPC layer,
//! a CLI, ...). None of them are used by the sorter itself.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{is_sorted, sort, Metrics, Order};

/// Elements to be sorted and the requested order. A missing order means ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortInput {
    pub elements: Vec<i32>,
    pub order: Option<Order>,
}

impl SortInput {
    pub fn new(elements: Vec<i32>, order: impl Into<Order>) -> Self {
        Self {
            elements,
            order: Some(order.into()),
        }
    }
}

/// Outcome of [`execute_sort`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortResponse {
    pub metrics: Metrics,
    pub sorted_elements: Vec<i32>,
}

/// Sort the elements of `input` and hand them back along with the metrics of the sort.
///
/// ```
/// use zort_bubble::orst::{execute_sort, interface::SortInput};
///
/// let response = execute_sort(SortInput::new(vec![5, 1, 4, 2, 8], "DESC"));
/// assert_eq!(response.sorted_elements, vec![8, 5, 4, 2, 1]);
/// ```
pub fn execute_sort(input: SortInput) -> SortResponse {
    let SortInput {
        mut elements,
        order,
    } = input;

    let metrics = sort(&mut elements, order.unwrap_or_default());
    SortResponse {
        metrics,
        sorted_elements: elements,
    }
}

/// Outcome of [`validate_sort`], stamped with the time the check was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortResult {
    pub sorted_elements: Vec<i32>,
    pub is_sorted: bool,
    pub timestamp: DateTime<Utc>,
}

pub fn validate_sort(elements: &[i32], order: Order) -> SortResult {
    SortResult {
        sorted_elements: elements.to_vec(),
        is_sorted: is_sorted(elements, order),
        timestamp: Utc::now(),
    }
}

/// There is nothing the sorter depends on, so it is always operational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn health_check() -> HealthStatus {
    HealthStatus {
        status: "operational",
        version: env!("CARGO_PKG_VERSION"),
    }
}
