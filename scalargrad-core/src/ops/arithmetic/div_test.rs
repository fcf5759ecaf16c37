use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::OpKind;
use crate::utils::testing::{check_grad_near, check_value_near};

#[test]
fn test_div_values() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    check_value_near(&div_op(&a, &b), 1.5, 1e-12);
    check_value_near(&(&a / &b), 1.5, 1e-12);
    check_value_near(&(&a / 2.0), 3.0, 1e-12);
    check_value_near(&(3.0 / &a), 0.5, 1e-12);
}

#[test]
fn test_div_is_mul_by_reciprocal() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    let c = &a / &b;
    assert_eq!(c.op_kind(), OpKind::Mul);
    let operands = c.operands();
    assert!(operands[0].ptr_eq(&a));
    assert_eq!(operands[1].op_kind(), OpKind::Pow(-1.0));
}

#[test]
fn test_div_backward() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    let c = &a / &b;
    c.backward();
    // d/da = 1/b, d/db = -a/b^2
    check_grad_near(&a, 0.25, 1e-12);
    check_grad_near(&b, -6.0 / 16.0, 1e-12);
}

#[test]
fn test_div_by_zero_is_infinite_not_an_error() {
    let a = Value::new(1.0);
    let b = Value::new(0.0);
    let c = &a / &b;
    assert!(c.data().is_infinite());
    assert!(c.data() > 0.0);
    c.backward();
    assert!(a.grad().is_infinite());
    assert!(!b.grad().is_finite());
}

#[test]
fn test_zero_by_zero_is_nan() {
    let a = Value::new(0.0);
    let b = Value::new(0.0);
    let c = &a / &b;
    assert!(c.data().is_nan());
}

#[test]
fn test_div_grad_check() {
    let func = |inputs: &[Value]| Ok(div_op(&inputs[0], &inputs[1]));
    assert_eq!(check_grad(func, &[1.2, -2.5], 1e-4, 1e-4), Ok(()));
}
