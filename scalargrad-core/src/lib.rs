//! # scalargrad-core
//!
//! A reverse-mode automatic-differentiation engine over scalar values, with the
//! handful of neural-network building blocks (neuron, layer, multi-layer
//! perceptron) needed to train small models by plain gradient descent.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = &a * &b + 10.0;
//! let d = c.tanh();
//! d.backward();
//! assert!(a.grad() != 0.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

// Re-export the graph node so it is reachable as `scalargrad_core::Value`
pub use error::GradError;
pub use model::{Output, MLP};
pub use value::Value;
