use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::traits::Scalar;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPass(ScalarGradError),
}

// Map ScalarGradError to GradCheckError::ForwardPass
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPass(err)
    }
}

/// Step size and tolerances used by [`check_grad`].
///
/// The defaults suit `f64`. They also work for `f32` on well-scaled inputs, although a larger
/// `epsilon` (around `1e-3`) with looser tolerances is more forgiving there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives one leaf per entry of `inputs`, all on a fresh graph, and returns the
/// scalar whose gradient is checked. It is evaluated once for the backward pass and twice per
/// input for `(f(x + ε) - f(x - ε)) / ((x + ε) - (x - ε))`, the denominator being measured in `T`
/// after rounding.
pub fn check_grad<T, F>(func: F, inputs: &[T], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves = graph.values(inputs);
    let output = func(&leaves)?;
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad().to_f64_lossy();
        let (loss_plus, x_plus) = evaluate(&func, inputs, input_index, config.epsilon)?;
        let (loss_minus, x_minus) = evaluate(&func, inputs, input_index, -config.epsilon)?;
        // The step actually taken in `T`, which rounding may have moved away from 2ε.
        let step = (x_plus - x_minus).to_f64_lossy();
        let numerical_grad = (loss_plus - loss_minus) / step;

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {} analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

/// Evaluates `func` on a fresh graph with input `index` shifted by `delta`.
///
/// Returns the output together with the shifted input as represented in `T`.
fn evaluate<T, F>(func: &F, inputs: &[T], index: usize, delta: f64) -> Result<(f64, T), GradCheckError>
where
    T: Scalar,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    let shifted = inputs[index] + T::from_f64_lossy(delta);
    let graph = Graph::new();
    let leaves: Vec<Value<T>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.value(if i == index { shifted } else { x }))
        .collect();
    Ok((func(&leaves)?.data().to_f64_lossy(), shifted))
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
