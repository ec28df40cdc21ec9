// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::add::add_node;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Subtracts `b` from `a`, recorded as `a + (-b)`.
pub fn sub_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    a.ensure_same_graph(b, "subtract")?;
    Ok(sub_node(a, b))
}

pub(crate) fn sub_node<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    add_node(a, &neg_op(b))
}

impl<T: Scalar> Value<T> {
    /// Fallible form of `self - other`.
    pub fn try_sub(&self, other: &Value<T>) -> Result<Value<T>, ScalarGradError> {
        sub_op(self, other)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
