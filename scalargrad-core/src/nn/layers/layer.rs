use crate::error::GradError;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer of independent [`Neuron`]s sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `n_outputs` neurons of `n_inputs` weights each, using the
    /// default initialisation.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, n_outputs: usize, rng: &mut R) -> Self {
        let neurons = (0..n_outputs).map(|_| Neuron::new(n_inputs, rng)).collect();
        Layer { neurons }
    }

    /// Like [`Layer::new`] with an explicit initialisation scheme.
    pub fn with_init<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::with_init(n_inputs, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `GradError::ArityMismatch` if the neurons disagree on their input size.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, GradError> {
        if let Some(first) = neurons.first() {
            let expected = first.n_inputs();
            if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != expected) {
                return Err(GradError::ArityMismatch {
                    expected,
                    actual: odd.n_inputs(),
                    operation: "Layer::from_neurons".to_string(),
                });
            }
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of inputs each neuron expects (0 for an empty layer).
    pub fn n_inputs(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::n_inputs)
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// Applies every neuron to the same `inputs`, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
