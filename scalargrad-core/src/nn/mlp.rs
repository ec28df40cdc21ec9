use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: ReLU layers followed by a linear output layer.
#[derive(Debug)]
pub struct Mlp<T: Scalar = f64> {
    layers: Vec<Layer<T>>,
}

impl<T: Scalar> Mlp<T> {
    /// Creates an MLP taking `nin` inputs, with one layer per entry of `nouts`.
    ///
    /// Every layer is nonlinear except the last one.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nin` is zero, `nouts` is empty, or a layer has no neuron.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph<T>,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nin == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one input".to_string(),
            ));
        }
        if nouts.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(index) = nouts.iter().position(|&n| n == 0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer {} has no neurons",
                index
            )));
        }

        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers: Vec<Layer<T>> = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Layer::new(graph, pair[0], pair[1], i != nouts.len() - 1, rng))
            .collect();
        let mlp = Mlp { layers };
        debug!("Mlp::new: sizes {:?}, {} parameters", sizes, mlp.parameters().len());
        Ok(mlp)
    }

    /// Feeds `x` through every layer and returns the last layer's outputs.
    pub fn forward(&self, x: &[Value<T>]) -> Result<Vec<Value<T>>, ScalarGradError> {
        let mut activations = x.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }
}

impl<T: Scalar> Module<T> for Mlp<T> {
    fn parameters(&self) -> Vec<Value<T>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl<T: Scalar> fmt::Display for Mlp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
