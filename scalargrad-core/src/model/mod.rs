pub mod mlp;

pub use mlp::{Output, MLP};
