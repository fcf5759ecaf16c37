// src/nn/mod.rs
// Neural-network building blocks assembled from graph operators.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use init::Init;
pub use layers::{Layer, Neuron};
pub use losses::{MSELoss, Reduction};
pub use module::Module;
