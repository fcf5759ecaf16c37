// src/value/accessors.rs
use crate::autograd::OpKind;
use crate::error::GradError;
use crate::value::Value;

impl Value {
    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the value of a leaf node.
    ///
    /// This is how parameters are updated between training steps. Nodes produced
    /// by an operator keep the value they were created with; rewriting one would
    /// silently invalidate every gradient computed through it.
    ///
    /// # Errors
    /// Returns `GradError::InplaceModification` if this node is not a leaf.
    pub fn set_data(&self, data: f64) -> Result<(), GradError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(GradError::InplaceModification {
                operation: "set_data".to_string(),
                reason: format!("node produced by '{}' is not a leaf", guard.op.kind()),
            });
        }
        guard.data = data;
        Ok(())
    }

    /// Resets the gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Overwrites the gradient. Only the backward seed needs this.
    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Returns the diagnostic label, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Sets (or replaces) the diagnostic label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns the tag of the operator that produced this node.
    pub fn op_kind(&self) -> OpKind {
        self.read_data().op.kind()
    }

    /// Returns handles to the operands of this node, in operator order.
    ///
    /// Empty for leaves. A node used twice by the same operator (`a * a`)
    /// appears twice.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().op.operands()
    }

    /// Returns `true` if this node was created directly rather than by an operator.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }
}
