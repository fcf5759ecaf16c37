use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;

/// Divides `a` by `b`, expressed as `a * b^-1`.
///
/// A zero divisor is not an error: `b^-1` is infinite and the infinity (or
/// NaN) propagates through the result and through the gradients.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

impl_binary_op!(Div, div, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
