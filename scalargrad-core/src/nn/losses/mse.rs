// src/nn/losses/mse.rs

use crate::error::GradError;
use crate::ops::{div_op, pow_op, sub_op};
use crate::value::Value;

/// Specifies the reduction to apply to the squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

impl std::str::FromStr for Reduction {
    type Err = GradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(GradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss built entirely from graph operators, so that
/// `loss.backward()` reaches every prediction.
#[derive(Debug, Clone)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (prediction - target)²`, divided by the count for
    /// `Reduction::Mean`.
    ///
    /// Targets are usually constant leaves (`Value::from_slice`). An empty
    /// batch yields a constant `0` leaf.
    ///
    /// # Errors
    /// `GradError::ArityMismatch` if the two slices differ in length.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, GradError> {
        if predictions.len() != targets.len() {
            return Err(GradError::ArityMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Ok(Value::new(0.0));
        }
        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| pow_op(&sub_op(p, t), 2.0))
            .sum();
        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => div_op(&total, &Value::new(predictions.len() as f64)),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
