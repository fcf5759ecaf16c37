use crate::error::GradError;
use crate::value::Value;
use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Epsilon must be strictly positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

impl From<GradError> for GradCheckError {
    fn from(err: GradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks the analytical gradients of `func` against central finite differences.
///
/// `func` builds a graph from one leaf per entry of `inputs` and returns its
/// output node. The analytical gradient of each leaf is obtained with a single
/// `backward()` on a fresh graph; the numerical one is
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`, each evaluation on a fresh graph.
///
/// A pair passes if it is within `tolerance` absolutely or relatively.
///
/// # Errors
/// The first failing input is reported as `GradientMismatch`; non-finite
/// gradients on either side are reported rather than compared.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical gradients ---
    let leaves = Value::from_slice(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- Numerical gradients, one input at a time ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        let (loss_plus, loss_minus) = perturbed_outputs(&func, inputs, input_index, epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Central-difference estimate of `d func / d inputs[input_index]`.
pub fn numerical_gradient<F>(
    func: F,
    inputs: &[f64],
    input_index: usize,
    epsilon: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradError>,
{
    if input_index >= inputs.len() {
        return Err(GradCheckError::ForwardPassError(GradError::IndexOutOfBounds {
            index: input_index,
            len: inputs.len(),
        }));
    }
    let (loss_plus, loss_minus) = perturbed_outputs(&func, inputs, input_index, epsilon)?;
    Ok((loss_plus - loss_minus) / (2.0 * epsilon))
}

/// Evaluates `func` with `inputs[input_index]` shifted by `+epsilon` and `-epsilon`.
fn perturbed_outputs<F>(
    func: &F,
    inputs: &[f64],
    input_index: usize,
    epsilon: f64,
) -> Result<(f64, f64), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, GradError>,
{
    let evaluate = |shift: f64| -> Result<f64, GradCheckError> {
        let mut shifted = inputs.to_vec();
        shifted[input_index] += shift;
        let leaves = Value::from_slice(&shifted);
        Ok(func(&leaves)?.data())
    };
    Ok((evaluate(epsilon)?, evaluate(-epsilon)?))
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
