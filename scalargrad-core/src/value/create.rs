// src/value/create.rs

use crate::autograd::Op;
use crate::value::Value;
use crate::value_data::ValueData;

impl Value {
    /// Creates a leaf node holding `data` with a zero gradient.
    ///
    /// # Example
    /// ```
    /// use scalargrad_core::Value;
    /// let x = Value::new(1.5);
    /// assert_eq!(x.data(), 1.5);
    /// assert_eq!(x.grad(), 0.0);
    /// assert!(x.is_leaf());
    /// ```
    pub fn new(data: f64) -> Self {
        Value::from_data(ValueData::new(data, Op::Leaf))
    }

    /// Creates a leaf node carrying a diagnostic label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.write_data().label = Some(label.into());
        value
    }

    /// Wraps every number of `data` into its own leaf, preserving order.
    pub fn from_slice(data: &[f64]) -> Vec<Value> {
        data.iter().copied().map(Value::new).collect()
    }

    /// Allocates the output node of an operator.
    ///
    /// `data` is the already-computed forward value; `op` owns the operands.
    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        Value::from_data(ValueData::new(data, op))
    }
}

impl From<f64> for Value {
    /// Promotes a plain number to a constant leaf.
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
