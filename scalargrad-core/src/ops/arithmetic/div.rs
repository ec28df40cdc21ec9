// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_node;
use crate::ops::arithmetic::pow::pow_node;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Divides `a` by `b`, recorded as `a * b^(-1)`.
///
/// A zero-valued divisor is not special-cased: the result and gradients follow IEEE
/// semantics (infinities and NaN).
pub fn div_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    a.ensure_same_graph(b, "divide")?;
    Ok(div_node(a, b))
}

pub(crate) fn div_node<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    mul_node(a, &pow_node(b, -T::one()))
}

impl<T: Scalar> Value<T> {
    /// Fallible form of `self / other`.
    pub fn try_div(&self, other: &Value<T>) -> Result<Value<T>, ScalarGradError> {
        div_op(self, other)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
