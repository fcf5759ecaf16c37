use crate::error::GradError;
use rand::Rng;
use rand_distr::StandardNormal;

/// Parameter initialisation scheme.
///
/// The default draws every weight and bias uniformly from `[-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks that the scheme describes a proper distribution.
    ///
    /// # Errors
    /// `GradError::InvalidHyperparameter` if a bound is not finite, if
    /// `low >= high`, or if `std` is negative or not finite.
    pub fn validate(&self) -> Result<(), GradError> {
        let invalid = |name: &str, value: f64| -> Result<(), GradError> {
            Err(GradError::InvalidHyperparameter {
                name: name.to_string(),
                value,
            })
        };
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() {
                    return invalid("init.low", low);
                }
                if !high.is_finite() || high <= low {
                    return invalid("init.high", high);
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() {
                    return invalid("init.mean", mean);
                }
                if !std.is_finite() || std < 0.0 {
                    return invalid("init.std", std);
                }
            }
        }
        Ok(())
    }

    /// Draws one value. The scheme is assumed valid (see [`Init::validate`]).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Init::Uniform { low, high } => low + (high - low) * rng.gen::<f64>(),
            Init::Normal { mean, std } => {
                let z: f64 = rng.sample(StandardNormal);
                mean + std * z
            }
        }
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
