// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities used by [`Neuron`](crate::nn::layers::Neuron).
//!
//! ## Currently Implemented:
//! - [`tanh_op`](tanh/fn.tanh_op.html): hyperbolic tangent.

pub mod tanh;

pub use tanh::tanh_op;
