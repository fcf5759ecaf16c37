use super::*;
use crate::datasets::Sample;

#[test]
fn test_vec_dataset_new() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    assert_eq!(dataset.len(), 5);
    assert!(!dataset.is_empty());
}

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0), Ok(10));
    assert_eq!(dataset.get(2), Ok(30));
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(
        dataset.get(3),
        Err(GradError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_of_samples() {
    let dataset: VecDataset<Sample> = vec![
        Sample::new(vec![1.0, -1.0], 1.0),
        Sample::new(vec![-2.0, 0.5], -1.0),
    ]
    .into_iter()
    .collect();
    let sample = dataset.get(1).unwrap();
    assert_eq!(sample.dim(), 2);
    let inputs = sample.inputs();
    assert_eq!(inputs[0].data(), -2.0);
    assert!(inputs.iter().all(|v| v.is_leaf()));
    assert_eq!(sample.target_value().data(), -1.0);
}
