// scalargrad-core/src/ops/activation/leaky_relu.rs

use crate::autograd::backward_op::Op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Negative slope used by [`Value::leaky_relu`].
pub const DEFAULT_LEAKY_RELU_ALPHA: f64 = 0.01;

/// Leaky ReLU: `a` when positive, `alpha * a` otherwise.
///
/// Backward: `a.grad += g` while the output is positive, `alpha * g` otherwise.
pub fn leaky_relu_op<T: Scalar>(a: &Value<T>, alpha: T) -> Value<T> {
    let x = a.data();
    let data = if x > T::zero() { x } else { alpha * x };
    a.graph.push_op(data, Op::LeakyRelu(a.id, alpha))
}

impl<T: Scalar> Value<T> {
    /// Leaky ReLU with the default slope [`DEFAULT_LEAKY_RELU_ALPHA`].
    pub fn leaky_relu(&self) -> Value<T> {
        leaky_relu_op(self, T::from_f64_lossy(DEFAULT_LEAKY_RELU_ALPHA))
    }

    /// Leaky ReLU with an explicit negative slope.
    pub fn leaky_relu_with(&self, alpha: T) -> Value<T> {
        leaky_relu_op(self, alpha)
    }
}

#[cfg(test)]
#[path = "leaky_relu_test.rs"]
mod tests;
