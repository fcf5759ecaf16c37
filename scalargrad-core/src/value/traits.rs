// src/value/traits.rs

use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the new handle refers to the same node, so gradient
    /// accumulated through one is visible through the other.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

/// Equality is node identity, not numeric equality: two distinct nodes holding
/// the same number are different graph vertices. Compare `data()` for values.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}
