use crate::error::GradError;
use crate::nn::init::Init;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// Result of [`MLP::predict`]: a bare node for single-output networks, the
/// full output vector otherwise.
#[derive(Debug, Clone)]
pub enum Output {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl Output {
    /// Returns the node of a single-output prediction.
    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Output::Scalar(v) => Some(v),
            Output::Vector(_) => None,
        }
    }

    /// Returns the outputs as a vector, wrapping a scalar in a one-element vector.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Scalar(v) => vec![v],
            Output::Vector(vs) => vs,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(vs) => vs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A multi-layer perceptron: a chain of tanh [`Layer`]s.
///
/// Built from `input_size`, the hidden widths and `output_size`; layer `i`
/// maps `sizes[i]` inputs to `sizes[i + 1]` outputs. Every layer, the last one
/// included, applies tanh.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use scalargrad_core::nn::Module;
/// use scalargrad_core::{Value, MLP};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mlp = MLP::with_rng(3, &[4, 4], 1, &mut rng).unwrap();
/// assert_eq!(mlp.num_parameters(), 41);
///
/// let y = mlp.predict(&Value::from_slice(&[2.0, 3.0, -1.0])).unwrap();
/// assert!(y.into_scalar().unwrap().data().abs() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct MLP {
    layers: Vec<Layer>,
}

impl MLP {
    /// Creates a network initialised from the thread-local RNG.
    ///
    /// # Errors
    /// `GradError::InvalidArchitecture` if any width is zero.
    pub fn new(
        input_size: usize,
        hidden_sizes: &[usize],
        output_size: usize,
    ) -> Result<Self, GradError> {
        Self::with_rng(input_size, hidden_sizes, output_size, &mut rand::thread_rng())
    }

    /// Creates a network drawing its parameters from `rng`, for reproducible
    /// runs.
    pub fn with_rng<R: Rng + ?Sized>(
        input_size: usize,
        hidden_sizes: &[usize],
        output_size: usize,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        Self::with_init(input_size, hidden_sizes, output_size, Init::default(), rng)
    }

    /// Creates a network with an explicit initialisation scheme.
    pub fn with_init<R: Rng + ?Sized>(
        input_size: usize,
        hidden_sizes: &[usize],
        output_size: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, GradError> {
        let mut sizes = Vec::with_capacity(hidden_sizes.len() + 2);
        sizes.push(input_size);
        sizes.extend_from_slice(hidden_sizes);
        sizes.push(output_size);

        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(GradError::InvalidArchitecture(format!(
                "layer width at position {} is zero (sizes {:?})",
                pos, sizes
            )));
        }

        let layers = sizes
            .windows(2)
            .map(|pair| Layer::with_init(pair[0], pair[1], init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        let mlp = MLP { layers };
        log::debug!(
            "Created MLP with sizes {:?} ({} parameters)",
            sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Builds a network from existing layers.
    ///
    /// # Errors
    /// `GradError::InvalidArchitecture` if there are no layers, a layer is
    /// empty, or consecutive widths do not chain.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, GradError> {
        if layers.is_empty() {
            return Err(GradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = layers.iter().position(|l| l.n_outputs() == 0) {
            return Err(GradError::InvalidArchitecture(format!(
                "layer {} has no neurons",
                i
            )));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].n_outputs() != pair[1].n_inputs() {
                return Err(GradError::InvalidArchitecture(format!(
                    "layer {} produces {} outputs but layer {} expects {} inputs",
                    i,
                    pair[0].n_outputs(),
                    i + 1,
                    pair[1].n_inputs()
                )));
            }
        }
        Ok(MLP { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer widths from the input to the output, e.g. `[4, 5, 5, 1]`.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.input_size()];
        sizes.extend(self.layers.iter().map(Layer::n_outputs));
        sizes
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::n_inputs)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::n_outputs)
    }

    /// Runs [`Module::forward`] on plain numbers, each wrapped in a fresh leaf.
    ///
    /// Use [`Module::forward`] directly when the inputs are already nodes, e.g.
    /// to read gradients with respect to them afterwards.
    pub fn forward_f64(&self, inputs: &[f64]) -> Result<Vec<Value>, GradError> {
        self.forward(&Value::from_slice(inputs))
    }

    /// Runs [`Module::forward`] and unwraps single-output networks.
    pub fn predict(&self, inputs: &[Value]) -> Result<Output, GradError> {
        let mut outputs = self.forward(inputs)?;
        if outputs.len() == 1 {
            if let Some(single) = outputs.pop() {
                return Ok(Output::Scalar(single));
            }
        }
        Ok(Output::Vector(outputs))
    }
}

impl Module for MLP {
    /// Feeds `inputs` through every layer in order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
