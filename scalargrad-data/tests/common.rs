use scalargrad_core::nn::{MSELoss, Module, Reduction};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{GradError, Value, MLP};
use scalargrad_data::{DataLoader, Sample, Sampler, VecDataset};

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs one pass over `loader`: for each batch, zero grads, sum the squared
/// errors, backpropagate and step. Returns the summed loss over the pass.
#[allow(dead_code)]
pub fn train_epoch<S: Sampler>(
    mlp: &MLP,
    loader: &mut DataLoader<VecDataset<Sample>, S>,
    optim: &mut SgdOptimizer,
) -> Result<f64, GradError> {
    let loss_fn = MSELoss::new(Reduction::Sum);
    let mut epoch_loss = 0.0;
    loader.reset();
    for batch in loader.by_ref() {
        let batch = batch?;
        let mut preds = Vec::with_capacity(batch.len());
        let mut targets = Vec::with_capacity(batch.len());
        for sample in &batch {
            preds.extend(mlp.forward(&sample.inputs())?);
            targets.push(sample.target_value());
        }
        let loss = loss_fn.calculate(&preds, &targets)?;
        optim.zero_grad();
        loss.backward();
        optim.step()?;
        epoch_loss += loss.data();
    }
    Ok(epoch_loss)
}

/// Counts samples whose prediction has the same sign as the target.
#[allow(dead_code)]
pub fn correct_signs(mlp: &MLP, samples: &[Sample]) -> Result<usize, GradError> {
    let mut correct = 0;
    for sample in samples {
        let out: Vec<Value> = mlp.forward(&sample.inputs())?;
        if out[0].data() * sample.target > 0.0 {
            correct += 1;
        }
    }
    Ok(correct)
}
