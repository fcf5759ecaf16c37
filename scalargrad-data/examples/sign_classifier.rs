//! Trains a small MLP to predict the sign of the sum of four numbers.
//!
//! Run with `RUST_LOG=info cargo run -p scalargrad-data --example sign_classifier`
//! (`RUST_LOG=debug` also shows optimizer steps and loader resets).

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{MSELoss, Module, Reduction};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{GradError, Output, MLP};
use scalargrad_data::toy::sign_dataset;
use scalargrad_data::{DataLoader, RandomSampler};

#[derive(Debug, Clone)]
struct TrainConfig {
    epochs: usize,
    lr: f64,
    seed: u64,
    hidden: Vec<usize>,
    batch_size: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 100,
            lr: 0.01,
            seed: 1337,
            hidden: vec![5, 5],
            batch_size: 8,
        }
    }
}

fn main() -> Result<(), GradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainConfig::default();
    log::info!("Training config: {:?}", config);

    let dataset = sign_dataset();
    let samples = dataset.items().to_vec();
    let input_size = samples.first().map_or(0, |s| s.dim());

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mlp = MLP::with_rng(input_size, &config.hidden, 1, &mut rng)?;
    log::info!(
        "Model sizes {:?}, {} parameters",
        mlp.sizes(),
        mlp.num_parameters()
    );

    let sampler = RandomSampler::with_seed(false, None, config.seed);
    let mut loader = DataLoader::new(dataset, config.batch_size, sampler, false, None);
    let mut optim = SgdOptimizer::new(mlp.parameters(), config.lr)?;
    let loss_fn = MSELoss::new(Reduction::Sum);

    for epoch in 0..config.epochs {
        loader.reset();
        let mut epoch_loss = 0.0;
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
        if epoch % 10 == 0 || epoch + 1 == config.epochs {
            log::info!("epoch {:>3}: loss = {:.6}", epoch, epoch_loss);
        }
    }

    let mut correct = 0;
    for sample in &samples {
        let prediction = match mlp.predict(&sample.inputs())? {
            Output::Scalar(v) => v.data(),
            Output::Vector(vs) => vs.first().map_or(f64::NAN, |v| v.data()),
        };
        if prediction * sample.target > 0.0 {
            correct += 1;
        }
        println!(
            "{:?} -> {:+.4} (target {:+})",
            sample.features, prediction, sample.target
        );
    }
    println!("{}/{} signs correct", correct, samples.len());
    Ok(())
}
