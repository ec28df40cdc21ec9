//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable primitive lives in its own file, grouped by family:
//!
//! - [`arithmetic`]: add, mul, pow, plus neg, sub and div expressed through them.
//! - [`math_elem`]: elementary functions (exp).
//! - [`activation`]: tanh, relu, leaky relu.
//! - [`overloads`]: `std::ops` impls so expressions read as ordinary arithmetic.
//!
//! Each primitive has an `xxx_op` function that computes the forward value and records the
//! result node together with its [`Op`](crate::autograd::Op) rule. Binary ops check that both
//! operands share a graph and return a `Result`; unary ops cannot fail.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod overloads;
pub mod traits;

pub use activation::{leaky_relu_op, relu_op, tanh_op, DEFAULT_LEAKY_RELU_ALPHA};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
