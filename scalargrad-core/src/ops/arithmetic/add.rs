use crate::autograd::Op;
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// The local rule passes the upstream gradient unchanged to both operands.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Op::Add(a.clone(), b.clone()))
}

impl_binary_op!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
