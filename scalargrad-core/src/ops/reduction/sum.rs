use crate::ops::arithmetic::add::add_op;
use crate::value::Value;
use std::iter::Sum;

/// Left fold of additions: `start + values[0] + values[1] + ...`.
///
/// Builds one `add` node per element; with no elements it returns `start`
/// itself (no new node).
pub fn sum_op(start: &Value, values: &[Value]) -> Value {
    values
        .iter()
        .fold(start.clone(), |acc, value| add_op(&acc, value))
}

impl Sum for Value {
    /// Sums the nodes of an iterator, starting from a constant `0` leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, value| add_op(&acc, &value))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::new(0.0), |acc, value| add_op(&acc, value))
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
