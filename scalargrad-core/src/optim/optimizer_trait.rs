use crate::error::GradError;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Updates every managed parameter from its accumulated gradient.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `GradError` if a managed
    /// parameter cannot be written (it is not a leaf).
    fn step(&mut self) -> Result<(), GradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across `backward()` calls, so this is called once
    /// per training iteration.
    fn zero_grad(&mut self);

    fn learning_rate(&self) -> f64;

    /// Replaces the learning rate used by subsequent steps.
    ///
    /// # Errors
    /// `GradError::InvalidHyperparameter` if `lr` is not finite and positive.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), GradError>;
}
