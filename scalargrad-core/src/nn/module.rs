use crate::error::GradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, models).
///
/// A module maps a slice of input nodes to a vector of output nodes and owns a
/// fixed, ordered set of parameter leaves. The order returned by
/// [`parameters`](Module::parameters) is stable across calls and matches the
/// order of [`named_parameters`](Module::named_parameters).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building new graph nodes on top of `inputs`.
    ///
    /// # Errors
    /// Returns `GradError::ArityMismatch` if `inputs` does not have the length
    /// the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, GradError>;

    /// Returns handles to every learnable parameter, including those of
    /// sub-modules. The handles alias the module's own leaves.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical, dot-separated names
    /// (e.g. `"neurons.0.weight.2"`).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
