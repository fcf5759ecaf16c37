// src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::value::Value;

/// Raises a node to a constant power: `base^exponent`.
///
/// The exponent is a plain number, never a graph node, so only the base
/// receives a gradient: `k * base^(k-1) * upstream`.
/// `0^-1` and friends follow IEEE-754 (`inf`, `NaN`).
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(base.data().powf(exponent), Op::Pow(base.clone(), exponent))
}

impl Value {
    /// Raises this node to a constant power. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
