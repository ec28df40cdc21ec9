// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::mul_node;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Negates a value, recorded as `a * -1` with a fresh constant leaf.
pub fn neg_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    mul_node(a, &a.constant(-T::one()))
}
