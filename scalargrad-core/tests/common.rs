use scalargrad_core::Value;

/// Installs `env_logger` once per test binary; `RUST_LOG=trace` shows the
/// engine's backward traces.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to build fresh leaves and read back their gradients.
#[allow(dead_code)]
pub fn leaves(data: &[f64]) -> Vec<Value> {
    Value::from_slice(data)
}

#[allow(dead_code)]
pub fn grads(values: &[Value]) -> Vec<f64> {
    values.iter().map(Value::grad).collect()
}
