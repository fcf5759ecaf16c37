// src/value_data.rs
use crate::autograd::Op;
use std::mem;
use std::rc::Rc;

/// Internal state of a graph node.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by [`Value`](crate::Value) so the
/// same node can be shared by every consumer and its gradient accumulated
/// through an immutable handle.
#[derive(Debug)]
pub struct ValueData {
    /// Forward value. Computed once when the node is created; only leaves may
    /// be rewritten afterwards.
    pub(crate) data: f64,
    /// Accumulated derivative of the last `backward()` root with respect to this node.
    pub(crate) grad: f64,
    /// The operator that produced this node, owning handles to its operands.
    /// Leaves carry `Op::Leaf`.
    pub(crate) op: Op,
    /// Optional diagnostic label.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates node state with a zero gradient.
    pub(crate) fn new(data: f64, op: Op) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            label: None,
        }
    }

    /// Returns `true` if this node was not produced by an operator.
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}

impl Drop for ValueData {
    /// Frees the operands this node exclusively owns with an explicit worklist,
    /// so tearing down a long chain uses constant stack. Operands still shared
    /// elsewhere only lose one reference.
    fn drop(&mut self) {
        let mut pending = mem::replace(&mut self.op, Op::Leaf).into_operands();
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut node = cell.into_inner();
                pending.extend(mem::replace(&mut node.op, Op::Leaf).into_operands());
            }
        }
    }
}

#[cfg(test)]
#[path = "value_data_test.rs"]
mod tests;
