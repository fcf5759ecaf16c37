use scalargrad_core::Value;

/// One supervised example: a feature vector and a scalar target.
///
/// Stored as plain numbers; [`Sample::inputs`] and [`Sample::target_value`]
/// wrap them into fresh constant leaves for each forward pass, so no graph
/// outlives the iteration that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Sample { features, target }
    }

    /// Fresh leaves for the features.
    pub fn inputs(&self) -> Vec<Value> {
        Value::from_slice(&self.features)
    }

    /// Fresh constant leaf for the target.
    pub fn target_value(&self) -> Value {
        Value::new(self.target)
    }

    pub fn dim(&self) -> usize {
        self.features.len()
    }
}
