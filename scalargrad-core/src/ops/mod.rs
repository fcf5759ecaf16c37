//! # Operations Module (`ops`)
//!
//! Every operator that extends the computation graph lives here.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operator has a core function (`add_op`, `pow_op`,
//!   `tanh_op`, ...) that computes the forward value from its operands' `data`
//!   and allocates a new node tagged with the matching [`Op`](crate::autograd::Op)
//!   variant. These functions are total: numeric edge cases (division by zero,
//!   overflow) produce IEEE-754 infinities/NaN rather than errors.
//! - **Overloads:** `std::ops` traits are implemented for every combination of
//!   `Value`, `&Value` and `f64`; a plain number is promoted to a constant leaf.
//! - **Methods:** unary operators are also available as `Value` methods
//!   (`x.pow(2.0)`, `x.exp()`, `x.tanh()`).
//!
//! Negation, subtraction and division are composed from the primitives and
//! have no local gradient rule of their own.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.
//! - [`reduction`]: sum.

/// Implements a binary `std::ops` trait for all `Value` / `&Value` / `f64`
/// operand combinations by forwarding to the given `_op` function.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a> std::ops::$trait<&'a $crate::value::Value> for &'a $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &'a $crate::value::Value) -> Self::Output {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> std::ops::$trait<&'a $crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &'a $crate::value::Value) -> Self::Output {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> std::ops::$trait<$crate::value::Value> for &'a $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(self, &rhs)
            }
        }

        impl<'a> std::ops::$trait<f64> for &'a $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(&self, &$crate::value::Value::new(rhs))
            }
        }

        impl<'a> std::ops::$trait<&'a $crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &'a $crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), &rhs)
            }
        }
    };
}

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
pub use reduction::sum_op;
