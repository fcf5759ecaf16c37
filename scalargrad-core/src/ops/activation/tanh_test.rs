use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_grad_near, check_value_near};
use approx::assert_relative_eq;

#[test]
fn test_tanh_values() {
    check_value_near(&tanh_op(&Value::new(0.0)), 0.0, 1e-12);
    check_value_near(&Value::new(0.5).tanh(), 0.5_f64.tanh(), 1e-12);
    check_value_near(&Value::new(-0.5).tanh(), -(0.5_f64.tanh()), 1e-12);
}

#[test]
fn test_tanh_backward_at_zero() {
    let a = Value::new(0.0);
    let b = a.tanh();
    b.backward();
    check_grad_near(&a, 1.0, 1e-12);
}

#[test]
fn test_tanh_backward() {
    let a = Value::new(0.8);
    let b = a.tanh();
    b.backward();
    let t = 0.8_f64.tanh();
    assert_relative_eq!(a.grad(), 1.0 - t * t, epsilon = 1e-12);
}

#[test]
fn test_tanh_saturates_on_large_inputs() {
    let big = Value::new(1000.0).tanh();
    let small = Value::new(-1000.0).tanh();
    assert_eq!(big.data(), 1.0);
    assert_eq!(small.data(), -1.0);

    let a = Value::new(50.0);
    let b = a.tanh();
    b.backward();
    assert!(a.grad().is_finite());
    check_grad_near(&a, 0.0, 1e-12);
}

#[test]
fn test_tanh_grad_check() {
    let func = |inputs: &[Value]| Ok(tanh_op(&(&(&inputs[0] * &inputs[1]) + 0.3)));
    assert_eq!(check_grad(func, &[0.6, -1.1], 1e-4, 1e-4), Ok(()));
}
