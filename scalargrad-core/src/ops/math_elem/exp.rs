use crate::autograd::Op;
use crate::value::Value;

/// Exponential: `e^a`.
///
/// The local derivative is the output itself, so the rule reuses `out.data`.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp(a.clone()))
}

impl Value {
    /// Returns `e^self`. See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
