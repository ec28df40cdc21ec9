// scalargrad-core/src/ops/activation/relu.rs

use crate::autograd::backward_op::Op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Rectified Linear Unit: `max(0, a)`.
///
/// Backward: `a.grad += g` while the output is positive; otherwise the operand receives
/// nothing, whatever the upstream gradient.
pub fn relu_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    let x = a.data();
    let data = if x < T::zero() { T::zero() } else { x };
    a.graph.push_op(data, Op::Relu(a.id))
}

impl<T: Scalar> Value<T> {
    /// `max(0, self)`; see [`relu_op`].
    pub fn relu(&self) -> Value<T> {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
