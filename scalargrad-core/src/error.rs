use thiserror::Error;

/// Error type for the scalargrad engine and its neural building blocks.
///
/// Numeric edge cases (division by zero, overflow, NaN) are never reported
/// here: they follow IEEE-754 and propagate through values and gradients.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradError {
    #[error("Arity mismatch in {operation}: expected {expected} inputs, got {actual}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("In-place modification error in {operation}: {reason}")]
    InplaceModification { operation: String, reason: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
