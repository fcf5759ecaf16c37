use crate::error::GradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::{add_op, mul_op, tanh_op};
use crate::value::Value;
use rand::Rng;

/// A single tanh unit: `tanh(bias + Σ wᵢ·xᵢ)`.
///
/// Owns one weight leaf per input and one bias leaf. Parameters are ordered
/// weights first, bias last.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights, all parameters drawn from the
    /// default uniform `[-1, 1)` scheme.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Self {
        Self::sampled(n_inputs, &Init::default(), rng)
    }

    /// Creates a neuron whose parameters are drawn from `init`.
    ///
    /// # Errors
    /// `GradError::InvalidHyperparameter` if `init` is not a valid scheme.
    pub fn with_init<R: Rng + ?Sized>(
        n_inputs: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        init.validate()?;
        Ok(Self::sampled(n_inputs, &init, rng))
    }

    /// Builds a neuron around existing leaves.
    pub fn from_parameters(weights: Vec<Value>, bias: Value) -> Self {
        Neuron { weights, bias }
    }

    fn sampled<R: Rng + ?Sized>(n_inputs: usize, init: &Init, rng: &mut R) -> Self {
        let weights = Value::from_slice(&init.sample_n(n_inputs, rng));
        let bias = Value::new(init.sample(rng));
        Neuron { weights, bias }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes `tanh(bias + Σ wᵢ·xᵢ)`.
    ///
    /// The sum starts at the bias and adds the products in input order.
    ///
    /// # Errors
    /// `GradError::ArityMismatch` if `inputs.len()` differs from the number of
    /// weights. Inputs are never truncated or padded.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, GradError> {
        if inputs.len() != self.weights.len() {
            return Err(GradError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| add_op(&acc, &mul_op(w, x)));
        Ok(tanh_op(&pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        params.push(("bias".to_string(), self.bias.clone()));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
