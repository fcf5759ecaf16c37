// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built from [`Value`](crate::Value) leaves.
//!
//! An optimizer holds handles to the parameter leaves it updates; after
//! `backward()` has filled their gradients, [`Optimizer::step`] rewrites their
//! data in place.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
