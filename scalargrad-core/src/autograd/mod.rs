//! # Autograd
//!
//! Reverse-mode differentiation over the node arena:
//!
//! - [`backward_op`]: the per-node propagation rule ([`Op`]) and its diagnostic tag ([`OpKind`]).
//! - [`graph`]: the topological sort of the nodes reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//!
//! The backward executor itself is [`Value::backward`](crate::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{Op, OpKind};
pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
