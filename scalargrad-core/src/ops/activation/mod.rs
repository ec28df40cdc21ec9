//! # Activation Functions
//!
//! Non-linear scalar activations:
//! - [`tanh`](tanh/fn.tanh_op.html)
//! - [`relu`](relu/fn.relu_op.html)
//! - [`leaky_relu`](leaky_relu/fn.leaky_relu_op.html)

pub mod leaky_relu;
pub mod relu;
pub mod tanh;

pub use leaky_relu::{leaky_relu_op, DEFAULT_LEAKY_RELU_ALPHA};
pub use relu::relu_op;
pub use tanh::tanh_op;
