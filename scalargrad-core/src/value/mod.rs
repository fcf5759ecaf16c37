// src/value/mod.rs

use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod debug;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node consumed by several operators is referenced,
///     not duplicated, so gradients from every path accumulate in one place.
/// 2.  **Interior Mutability:** `grad` (and the `data` of leaves) can be updated
///     through a shared handle.
///
/// Edges only point from a node to its operands, so dropping the last handle to
/// a loss frees the forward graph while parameters held elsewhere survive.
/// Cloning a `Value` clones the handle, never the node.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Wraps freshly built node state in a handle.
    pub(crate) fn from_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    /// Borrows the node state immutably.
    ///
    /// Panics if the node is currently borrowed mutably, which the engine never
    /// does across calls.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node state mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Stable identity of the node, used as the visited-set key during backward.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

/// Identity of a node: the address of its shared state.
pub(crate) type NodeId = *const RefCell<ValueData>;

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
