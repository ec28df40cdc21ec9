// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::backward_op::Op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Computes `e^a`.
///
/// Backward: `a.grad += out * g`, reusing the forward result. Overflow yields infinity.
pub fn exp_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    let data = a.data().exp();
    a.graph.push_op(data, Op::Exp(a.id))
}

impl<T: Scalar> Value<T> {
    /// `e^self`; see [`exp_op`].
    pub fn exp(&self) -> Value<T> {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
