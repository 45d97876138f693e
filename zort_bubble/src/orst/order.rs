use serde::Serialize;
use std::fmt::Display;

/// The direction in which a slice gets sorted.
///
/// Anything that cannot be recognised as a descending order falls back to
/// [`Order::Ascending`], there is no way to construct an invalid order.
///
/// ```
/// use zort_bubble::orst::Order;
///
/// assert_eq!(Order::from("DESC"), Order::Descending);
/// assert_eq!(Order::from("sideways"), Order::Ascending);
/// assert_eq!(None::<Order>.unwrap_or_default(), Order::Ascending);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Order {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,

    #[serde(rename = "DESC")]
    Descending,
}

impl Order {
    /// Returns `true` if the adjacent pair `(a, b)` may stay where it is.
    ///
    /// Equal elements are always in order, which is what keeps the sort stable.
    #[inline]
    pub fn in_order(self, a: i32, b: i32) -> bool {
        match self {
            Order::Ascending => a <= b,
            Order::Descending => a >= b,
        }
    }
}

impl From<&str> for Order {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("desc") || value.eq_ignore_ascii_case("descending") {
            Order::Descending
        } else {
            Order::Ascending
        }
    }
}

impl From<Option<&str>> for Order {
    fn from(value: Option<&str>) -> Self {
        value.map(Order::from).unwrap_or_default()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Ascending => write!(f, "ASC"),
            Order::Descending => write!(f, "DESC"),
        }
    }
}
