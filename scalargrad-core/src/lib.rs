//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every arithmetic operation on a [`Value`] records a node in its [`Graph`]; calling
//! [`Value::backward`] on a result walks the recorded graph in reverse topological order
//! and accumulates `d(result)/d(node)` into every node it reaches.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.value(2.0);
//! let q = &x * &x + &x;
//! q.backward();
//! assert_eq!(q.data(), 6.0);
//! assert_eq!(x.grad(), 5.0);
//! ```

// Core engine
pub mod autograd;
pub mod graph;
pub mod node;
pub mod ops;
pub mod value;

// Thin compositional layer built on the public operations
pub mod nn;
pub mod utils;

pub mod error;

pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::NodeId;
pub use ops::traits::Scalar;
pub use value::Value;

// Re-export traits required by public functions/structs
pub use num_traits;
