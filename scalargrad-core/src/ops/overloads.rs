//! `std::ops` overloads so expressions on [`Value`]s read as ordinary arithmetic.
//!
//! Every combination of owned and borrowed values is supported, as is a raw scalar on either
//! side; the scalar is promoted to a fresh constant leaf on the value's graph.
//!
//! Operands must come from the same graph. The operators panic otherwise (like the
//! `try_add`/`try_mul`/... methods, which return `GraphMismatch` instead).

use crate::ops::arithmetic::add::add_node;
use crate::ops::arithmetic::div::div_node;
use crate::ops::arithmetic::mul::mul_node;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::arithmetic::sub::sub_node;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn assert_same_graph<T: Scalar>(lhs: &Value<T>, rhs: &Value<T>, operation: &str) {
    assert!(
        lhs.graph.ptr_eq(&rhs.graph),
        "Cannot {} values that belong to different graphs",
        operation
    );
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $node_fn:ident, $name:literal) => {
        impl<T: Scalar> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                assert_same_graph(&self, &rhs, $name);
                $node_fn(&self, &rhs)
            }
        }

        impl<'a, T: Scalar> $trait<&'a Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'a Value<T>) -> Value<T> {
                assert_same_graph(&self, rhs, $name);
                $node_fn(&self, rhs)
            }
        }

        impl<'a, T: Scalar> $trait<Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                assert_same_graph(self, &rhs, $name);
                $node_fn(self, &rhs)
            }
        }

        impl<'a, 'b, T: Scalar> $trait<&'b Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'b Value<T>) -> Value<T> {
                assert_same_graph(self, rhs, $name);
                $node_fn(self, rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $node_fn(&self, &self.constant(rhs))
            }
        }

        impl<'a, T: Scalar> $trait<T> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $node_fn(self, &self.constant(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_node, "add");
impl_binary_op!(Sub, sub, sub_node, "subtract");
impl_binary_op!(Mul, mul, mul_node, "multiply");
impl_binary_op!(Div, div, div_node, "divide");

// Reflected forms (`2.0 * x`): the scalar becomes the left operand.
macro_rules! impl_reflected_ops {
    ($($scalar:ty),*) => {$(
        impl Add<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn add(self, rhs: Value<$scalar>) -> Value<$scalar> {
                add_node(&rhs.constant(self), &rhs)
            }
        }

        impl<'a> Add<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn add(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                add_node(&rhs.constant(self), rhs)
            }
        }

        impl Sub<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn sub(self, rhs: Value<$scalar>) -> Value<$scalar> {
                sub_node(&rhs.constant(self), &rhs)
            }
        }

        impl<'a> Sub<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn sub(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                sub_node(&rhs.constant(self), rhs)
            }
        }

        impl Mul<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn mul(self, rhs: Value<$scalar>) -> Value<$scalar> {
                mul_node(&rhs.constant(self), &rhs)
            }
        }

        impl<'a> Mul<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn mul(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                mul_node(&rhs.constant(self), rhs)
            }
        }

        impl Div<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn div(self, rhs: Value<$scalar>) -> Value<$scalar> {
                div_node(&rhs.constant(self), &rhs)
            }
        }

        impl<'a> Div<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn div(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                div_node(&rhs.constant(self), rhs)
            }
        }
    )*};
}

impl_reflected_ops!(f32, f64);

impl<T: Scalar> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(&self)
    }
}

impl<'a, T: Scalar> Neg for &'a Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "overloads_test.rs"]
mod tests;
