use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::ops::traits::Scalar;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A set of neurons evaluated independently on the same inputs.
#[derive(Debug)]
pub struct Layer<T: Scalar = f64> {
    neurons: Vec<Neuron<T>>,
}

impl<T: Scalar> Layer<T> {
    /// Creates `nout` neurons with `nin` inputs each.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph<T>,
        nin: usize,
        nout: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Self {
        Layer {
            neurons: (0..nout)
                .map(|_| Neuron::new(graph, nin, nonlinear, rng))
                .collect(),
        }
    }

    /// One output per neuron, in order.
    pub fn forward(&self, x: &[Value<T>]) -> Result<Vec<Value<T>>, ScalarGradError> {
        self.neurons.iter().map(|n| n.forward(x)).collect()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }
}

impl<T: Scalar> Module<T> for Layer<T> {
    fn parameters(&self) -> Vec<Value<T>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl<T: Scalar> fmt::Display for Layer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}
