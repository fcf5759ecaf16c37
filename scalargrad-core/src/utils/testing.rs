use crate::value::Value;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with the node and the difference otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.data() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks that a node's accumulated gradient is within `tolerance` of `expected`.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.grad() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Element-wise [`check_value_near`] over a slice of nodes.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a.data() - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}
