use super::traits::Dataset;
use scalargrad_core::GradError;

/// A simple dataset that wraps a `Vec` of items.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Borrows every item in storage order.
    pub fn items(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, GradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(GradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Clone> FromIterator<T> for VecDataset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VecDataset::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
