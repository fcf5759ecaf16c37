//! Sign-of-sum toy classification data.

use crate::datasets::{Sample, VecDataset};
use rand::Rng;

/// The fixed eight-row, four-feature dataset: the target is `+1` when the
/// features sum to a positive number and `-1` otherwise.
pub const SIGN_ROWS: [([f64; 4], f64); 8] = [
    ([2.0, 3.0, -1.0, 0.5], 1.0),
    ([3.0, -1.0, 0.5, 1.0], 1.0),
    ([0.5, 1.0, 1.0, -0.5], 1.0),
    ([1.0, 1.0, -1.0, 2.0], 1.0),
    ([-2.0, -1.0, 1.0, -0.5], -1.0),
    ([-1.0, -3.0, 0.5, 1.0], -1.0),
    ([0.5, -2.0, -1.5, 0.5], -1.0),
    ([-1.5, 0.5, -1.0, -1.0], -1.0),
];

/// `+1.0` for a positive sum, `-1.0` otherwise (zero counts as negative).
pub fn sign_label(features: &[f64]) -> f64 {
    if features.iter().sum::<f64>() > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// [`SIGN_ROWS`] as a dataset.
pub fn sign_dataset() -> VecDataset<Sample> {
    SIGN_ROWS
        .iter()
        .map(|(features, target)| Sample::new(features.to_vec(), *target))
        .collect()
}

/// `n` rows of `dim` features drawn uniformly from `[-2, 2)`, labelled by
/// [`sign_label`].
pub fn random_sign_dataset<R: Rng + ?Sized>(n: usize, dim: usize, rng: &mut R) -> VecDataset<Sample> {
    (0..n)
        .map(|_| {
            let features: Vec<f64> = (0..dim).map(|_| rng.gen_range(-2.0..2.0)).collect();
            let target = sign_label(&features);
            Sample::new(features, target)
        })
        .collect()
}

#[cfg(test)]
#[path = "toy_test.rs"]
mod tests;
