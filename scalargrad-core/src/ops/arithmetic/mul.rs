use crate::autograd::Op;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Each operand receives the upstream gradient scaled by the other operand's
/// value.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Op::Mul(a.clone(), b.clone()))
}

impl_binary_op!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
