use crate::error::GradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Plain gradient descent: `p <- p - lr * p.grad` for every managed parameter.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
}

fn check_lr(lr: f64) -> Result<(), GradError> {
    if !(lr.is_finite() && lr > 0.0) {
        return Err(GradError::InvalidHyperparameter {
            name: "lr".to_string(),
            value: lr,
        });
    }
    Ok(())
}

impl SgdOptimizer {
    /// Creates an optimizer over `params`, usually `model.parameters()`.
    ///
    /// # Errors
    /// - `GradError::InvalidHyperparameter` if `lr` is not finite and positive.
    /// - `GradError::InplaceModification` if a parameter is not a leaf. Leaves
    ///   stay leaves, so `step` can then never fail halfway through.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, GradError> {
        check_lr(lr)?;
        let params: Vec<Value> = params.into_iter().collect();
        if let Some((index, param)) = params.iter().enumerate().find(|(_, p)| !p.is_leaf()) {
            return Err(GradError::InplaceModification {
                operation: "SgdOptimizer::new".to_string(),
                reason: format!(
                    "parameter {} is produced by '{}', not a leaf",
                    index,
                    param.op_kind()
                ),
            });
        }
        Ok(SgdOptimizer { params, lr })
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), GradError> {
        let mut non_finite = 0;
        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                non_finite += 1;
            }
            param.set_data(param.data() - self.lr * grad)?;
        }
        if non_finite > 0 {
            log::warn!(
                "SGD step applied {} non-finite gradient(s) out of {} parameters",
                non_finite,
                self.params.len()
            );
        }
        log::debug!("SGD step: {} parameters, lr={}", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), GradError> {
        check_lr(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
