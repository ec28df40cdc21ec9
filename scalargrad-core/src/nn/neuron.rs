use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::nn::init;
use crate::nn::module::Module;
use crate::ops::traits::Scalar;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single neuron: `relu(w · x + b)`, or `w · x + b` when linear.
#[derive(Debug)]
pub struct Neuron<T: Scalar = f64> {
    weights: Vec<Value<T>>,
    bias: Value<T>,
    nonlinear: bool,
}

impl<T: Scalar> Neuron<T> {
    /// Creates a neuron with `nin` inputs.
    ///
    /// Weights are drawn uniformly from [`init::INIT_RANGE`], the bias starts at zero.
    pub fn new<R: Rng + ?Sized>(graph: &Graph<T>, nin: usize, nonlinear: bool, rng: &mut R) -> Self {
        Neuron {
            weights: init::uniform_n(graph, nin, rng),
            bias: init::zeros(graph),
            nonlinear,
        }
    }

    /// Forward pass over one input sample.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `x` does not hold one value per weight; `GraphMismatch` if the
    /// inputs live on another graph than the parameters.
    pub fn forward(&self, x: &[Value<T>]) -> Result<Value<T>, ScalarGradError> {
        if x.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: x.len(),
            });
        }
        let activation = self
            .weights
            .iter()
            .zip(x)
            .try_fold(self.bias.clone(), |acc, (wi, xi)| acc.try_add(&wi.try_mul(xi)?))?;
        Ok(if self.nonlinear {
            activation.relu()
        } else {
            activation
        })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Value<T> {
        &self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    fn parameters(&self) -> Vec<Value<T>> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl<T: Scalar> fmt::Display for Neuron<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlinear { "ReLU" } else { "Linear" };
        write!(f, "{} Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
