// scalargrad-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cell::Cell;

/// A sampler that randomly samples indices from a dataset.
///
/// Unseeded samplers draw from the thread-local RNG. A seeded sampler is
/// reproducible across runs: pass `k` uses `seed + k`, so consecutive passes
/// still differ from each other.
#[derive(Debug)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
    passes: Cell<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
            passes: Cell::new(0),
        }
    }

    /// Like [`RandomSampler::new`], but reproducible.
    pub fn with_seed(replacement: bool, num_samples: Option<usize>, seed: u64) -> Self {
        RandomSampler {
            seed: Some(seed),
            ..Self::new(replacement, num_samples)
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R, dataset_len: usize, count: usize) -> Vec<usize> {
        if self.replacement {
            (0..count).map(|_| rng.gen_range(0..dataset_len)).collect()
        } else {
            let mut indices: Vec<usize> = (0..dataset_len).collect();
            indices.shuffle(rng);
            indices.truncate(count);
            indices
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let count = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && count > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement. Returning empty iterator.",
                count,
                dataset_len
            );
            return Box::new(std::iter::empty());
        }

        let indices = match self.seed {
            Some(seed) => {
                let pass = self.passes.get();
                self.passes.set(pass + 1);
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(pass));
                self.draw(&mut rng, dataset_len, count)
            }
            None => self.draw(&mut rand::thread_rng(), dataset_len, count),
        };
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        let count = self.num_samples.unwrap_or(dataset_len);
        if !self.replacement && count > dataset_len {
            0
        } else {
            count
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
