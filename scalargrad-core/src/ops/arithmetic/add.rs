// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Adds two values of the same graph.
///
/// Backward: both operands receive the upstream gradient unchanged.
pub fn add_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    a.ensure_same_graph(b, "add")?;
    Ok(add_node(a, b))
}

/// `a + b` for operands already known to share a graph.
pub(crate) fn add_node<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    let data = a.data() + b.data();
    a.graph.push_op(data, Op::Add(a.id, b.id))
}

impl<T: Scalar> Value<T> {
    /// Fallible form of `self + other`.
    pub fn try_add(&self, other: &Value<T>) -> Result<Value<T>, ScalarGradError> {
        add_op(self, other)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
