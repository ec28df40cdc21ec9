// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Multiplies two values of the same graph.
///
/// Backward: `a.grad += b * g`, `b.grad += a * g`.
pub fn mul_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    a.ensure_same_graph(b, "multiply")?;
    Ok(mul_node(a, b))
}

pub(crate) fn mul_node<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    let data = a.data() * b.data();
    a.graph.push_op(data, Op::Mul(a.id, b.id))
}

impl<T: Scalar> Value<T> {
    /// Fallible form of `self * other`.
    pub fn try_mul(&self, other: &Value<T>) -> Result<Value<T>, ScalarGradError> {
        mul_op(self, other)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
