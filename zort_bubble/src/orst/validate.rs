use super::Order;

/// Checks, in a single pass, that every adjacent pair of `slice` respects `order`.
///
/// Empty and single element slices are sorted by definition.
///
/// ```
/// use zort_bubble::orst::{is_sorted, Order};
///
/// assert!(is_sorted(&[1, 2, 2, 3], Order::Ascending));
/// assert!(!is_sorted(&[1, 2, 2, 3], Order::Descending));
/// assert!(is_sorted(&[], Order::Descending));
/// ```
pub fn is_sorted(slice: &[i32], order: Order) -> bool {
    slice.windows(2).all(|w| order.in_order(w[0], w[1]))
}
