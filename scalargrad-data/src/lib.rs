//! # scalargrad-data
//!
//! Small-scale data plumbing for training `scalargrad-core` models: datasets
//! indexed by position, samplers that choose the visiting order, and a
//! batching [`DataLoader`]. The [`toy`] module holds the sign-of-sum
//! classification data used by the examples and end-to-end tests.

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod toy;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, Sample, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
