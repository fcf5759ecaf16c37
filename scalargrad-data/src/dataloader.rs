// dataloader.rs
//! # DataLoader
//!
//! Groups dataset items into batches, in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use scalargrad_data::dataloader::DataLoader;
//! use scalargrad_data::datasets::VecDataset;
//! use scalargrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let mut loader = DataLoader::new(dataset, 4, SequentialSampler::new(), false, None);
//! assert_eq!(loader.next(), Some(Ok(vec![1, 2, 3, 4])));
//! assert_eq!(loader.next(), Some(Ok(vec![5, 6])));
//! assert_eq!(loader.next(), None);
//!
//! loader.reset();
//! assert_eq!(loader.count(), 2);
//! ```
//!
//! A loader is a single-pass iterator; call [`DataLoader::reset`] to start the
//! next epoch.

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use scalargrad_core::GradError;

/// Custom collation applied to each batch before it is yielded.
pub type CollateFn<D> =
    Box<dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, GradError>>;

/// Batching iterator over a [`Dataset`].
///
/// Yields `Ok(batch)` with up to `batch_size` items, or `Err` if the dataset
/// rejects an index. The last batch may be short unless `drop_last` is set.
/// A `batch_size` of zero yields nothing.
pub struct DataLoader<D: Dataset, S: Sampler> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Creates a loader whose batches are the plain `Vec` of items.
    pub fn with_default_collate(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        Self::new(dataset, batch_size, sampler, drop_last, None)
    }

    /// Starts a new pass: draws a fresh index order from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
        log::debug!(
            "DataLoader reset: {} samples, batch_size={}, drop_last={}",
            self.sampler.len(self.dataset.len()),
            self.batch_size,
            self.drop_last
        );
    }

    /// Number of batches one full pass yields.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, GradError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            let Some(idx) = self.indices_iter.next() else {
                break;
            };
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match self.collate_fn {
            Some(ref collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
