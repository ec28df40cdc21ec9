// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Raises `base` to a fixed real `exponent`.
///
/// The exponent is a plain number, not a node: it receives no gradient.
/// Backward: `base.grad += exponent * base^(exponent - 1) * g`.
///
/// # Errors
/// `InvalidExponent` if `exponent` is NaN or infinite.
pub fn pow_op<T: Scalar>(base: &Value<T>, exponent: T) -> Result<Value<T>, ScalarGradError> {
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidExponent {
            exponent: exponent.to_f64_lossy(),
        });
    }
    Ok(pow_node(base, exponent))
}

/// `base ** exponent` for an exponent already known to be finite.
pub(crate) fn pow_node<T: Scalar>(base: &Value<T>, exponent: T) -> Value<T> {
    let data = base.data().powf(exponent);
    base.graph.push_op(data, Op::Pow(base.id, exponent))
}

impl<T: Scalar> Value<T> {
    /// `self ** exponent`; see [`pow_op`].
    pub fn powf(&self, exponent: T) -> Result<Value<T>, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
