use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_grad_near, check_value_near};
use std::str::FromStr;

#[test]
fn test_sum_reduction() {
    let loss_fn = MSELoss::new(Reduction::Sum);
    let preds = Value::from_slice(&[1.0, 2.0, 3.0]);
    let targets = Value::from_slice(&[1.5, 2.0, 1.0]);
    let loss = loss_fn.calculate(&preds, &targets).unwrap();
    check_value_near(&loss, 0.25 + 0.0 + 4.0, 1e-12);
}

#[test]
fn test_mean_reduction() {
    let loss_fn = MSELoss::new(Reduction::Mean);
    let preds = Value::from_slice(&[1.0, 2.0, 3.0]);
    let targets = Value::from_slice(&[1.5, 2.0, 1.0]);
    let loss = loss_fn.calculate(&preds, &targets).unwrap();
    check_value_near(&loss, 4.25 / 3.0, 1e-12);
}

#[test]
fn test_backward_gradients() {
    let loss_fn = MSELoss::new(Reduction::Sum);
    let preds = Value::from_slice(&[1.0, -1.0]);
    let targets = Value::from_slice(&[0.0, 1.0]);
    let loss = loss_fn.calculate(&preds, &targets).unwrap();
    loss.backward();
    // d/dp (p - t)^2 = 2 (p - t)
    check_grad_near(&preds[0], 2.0, 1e-12);
    check_grad_near(&preds[1], -4.0, 1e-12);
}

#[test]
fn test_mean_backward_scales_by_count() {
    let loss_fn = MSELoss::new(Reduction::Mean);
    let preds = Value::from_slice(&[1.0, -1.0]);
    let targets = Value::from_slice(&[0.0, 1.0]);
    loss_fn.calculate(&preds, &targets).unwrap().backward();
    check_grad_near(&preds[0], 1.0, 1e-12);
    check_grad_near(&preds[1], -2.0, 1e-12);
}

#[test]
fn test_length_mismatch() {
    let loss_fn = MSELoss::new(Reduction::Sum);
    let result = loss_fn.calculate(&Value::from_slice(&[1.0]), &Value::from_slice(&[1.0, 2.0]));
    assert!(matches!(
        result,
        Err(GradError::ArityMismatch {
            expected: 1,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_empty_batch_is_zero() {
    let loss = MSELoss::new(Reduction::Mean).calculate(&[], &[]).unwrap();
    check_value_near(&loss, 0.0, 0.0);
}

#[test]
fn test_reduction_from_str() {
    assert_eq!(Reduction::from_str("Mean"), Ok(Reduction::Mean));
    assert_eq!(Reduction::from_str("sum"), Ok(Reduction::Sum));
    assert!(Reduction::from_str("none").is_err());
}

#[test]
fn test_mse_grad_check() {
    let func = |inputs: &[Value]| {
        let targets = Value::from_slice(&[0.5, -0.5]);
        MSELoss::new(Reduction::Mean).calculate(inputs, &targets)
    };
    assert_eq!(check_grad(func, &[0.2, 0.9], 1e-4, 1e-4), Ok(()));
}
