//! # Autograd
//!
//! Reverse-mode differentiation over the graph of [`Value`](crate::Value) nodes.
//!
//! - [`backward_op`]: the [`Op`] tag stored on every node and the single
//!   dispatcher applying each operator's local gradient rule.
//! - [`graph`]: post-order traversal of the graph reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytic gradients.
//!
//! The entry point is [`Value::backward`](crate::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{Op, OpKind};
pub use graph::topological_sort;
