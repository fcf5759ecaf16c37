// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    /// Shows the node itself but not its operands, so large graphs stay readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                let mut s = f.debug_struct("Value");
                s.field("data", &guard.data)
                    .field("grad", &guard.grad)
                    .field("op", &guard.op.kind());
                if let Some(label) = &guard.label {
                    s.field("label", label);
                }
                s.finish()
            }
            Err(_) => write!(f, "Value(<mutably borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}
