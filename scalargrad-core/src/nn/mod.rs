// src/nn/mod.rs
// Neurons, layers and multi-layer perceptrons composed from scalar values.

pub mod init;
pub mod layer;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
