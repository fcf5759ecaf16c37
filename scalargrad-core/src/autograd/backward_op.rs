use crate::value::Value;
use std::fmt;

/// The operator that produced a node, together with its operands.
///
/// This is the only graph edge a node stores: operands are owned handles, so a
/// node keeps its inputs alive and never the other way round. Derived
/// operations (negation, subtraction, division) are expressed with these
/// primitives and have no variant of their own.
#[derive(Debug, Clone)]
pub enum Op {
    /// Created directly (input, parameter or constant).
    Leaf,
    Add(Value, Value),
    Mul(Value, Value),
    /// Base raised to a constant exponent.
    Pow(Value, f64),
    Exp(Value),
    Tanh(Value),
}

impl Op {
    /// Returns the operand handles in operator order.
    pub fn operands(&self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a.clone(), b.clone()],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) => vec![a.clone()],
        }
    }

    /// Consumes the operator, handing back the operand handles it owned.
    pub(crate) fn into_operands(self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) => vec![a],
        }
    }

    /// Returns the diagnostic tag of this operator.
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow(_, exponent) => OpKind::Pow(*exponent),
            Op::Exp(_) => OpKind::Exp,
            Op::Tanh(_) => OpKind::Tanh,
        }
    }
}

/// Operand-free tag of an [`Op`], for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Exp,
    Tanh,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => Ok(()),
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(exponent) => write!(f, "**{}", exponent),
            OpKind::Exp => write!(f, "exp"),
            OpKind::Tanh => write!(f, "tanh"),
        }
    }
}

/// Applies the local gradient rule of `node`, accumulating into its operands.
///
/// Reads the node's own `grad`, which must already be final: every consumer of
/// `node` has to be processed first (see [`Value::backward`]).
///
/// For output `out = f(a, b)` with upstream gradient `g = out.grad`:
///
/// | op   | rule                                          |
/// |------|-----------------------------------------------|
/// | add  | `a.grad += g`, `b.grad += g`                  |
/// | mul  | `a.grad += b.data * g`, `b.grad += a.data * g` |
/// | pow  | `a.grad += k * a.data^(k-1) * g`              |
/// | exp  | `a.grad += out.data * g`                      |
/// | tanh | `a.grad += (1 - out.data^2) * g`              |
pub(crate) fn apply_local_backward(node: &Value) {
    // Copy what the rule needs and release the borrow before touching operands.
    let (op, out_data, out_grad) = {
        let guard = node.read_data();
        (guard.op.clone(), guard.data, guard.grad)
    };

    match op {
        Op::Leaf => {}
        Op::Add(a, b) => {
            a.acc_grad(out_grad);
            b.acc_grad(out_grad);
        }
        Op::Mul(a, b) => {
            let (a_data, b_data) = (a.data(), b.data());
            a.acc_grad(b_data * out_grad);
            b.acc_grad(a_data * out_grad);
        }
        Op::Pow(a, exponent) => {
            let base = a.data();
            a.acc_grad(exponent * base.powf(exponent - 1.0) * out_grad);
        }
        Op::Exp(a) => a.acc_grad(out_data * out_grad),
        Op::Tanh(a) => a.acc_grad((1.0 - out_data * out_data) * out_grad),
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
