use crate::autograd::Op;
use crate::value::Value;

/// Hyperbolic tangent: `tanh(a)`.
///
/// The local derivative `1 - tanh(a)^2` is computed from the output value.
/// Large inputs saturate to `±1` rather than overflowing.
pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), Op::Tanh(a.clone()))
}

impl Value {
    /// Returns `tanh(self)`. See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
