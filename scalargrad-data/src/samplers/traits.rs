// scalargrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug {
    /// Returns a fresh iterator over indices for one pass over a dataset of
    /// `dataset_len` items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices one call to [`Sampler::iter`] yields.
    fn len(&self, dataset_len: usize) -> usize;
}
