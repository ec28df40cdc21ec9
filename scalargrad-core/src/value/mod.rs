//! The user-facing handle to a node.

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;

pub mod accessors;
pub mod autograd_methods;
pub mod traits;

/// Handle to a scalar node in a computation [`Graph`].
///
/// A `Value` is a `(graph, id)` pair: cloning it clones the handle, not the node. Arithmetic on
/// values records new nodes in the shared graph, and [`Value::backward`] fills in the `grad` of
/// every node the result depends on.
///
/// # Example
///
/// ```
/// use scalargrad_core::Graph;
///
/// let graph = Graph::new();
/// let a = graph.value(2.0);
/// let b = graph.value(-3.0);
/// let c = &a * &b + 10.0;
/// c.backward();
/// assert_eq!(c.data(), 4.0);
/// assert_eq!(a.grad(), -3.0);
/// assert_eq!(b.grad(), 2.0);
/// ```
pub struct Value<T: Scalar = f64> {
    pub(crate) graph: Graph<T>,
    pub(crate) id: NodeId,
}

impl<T: Scalar> Value<T> {
    pub(crate) fn from_parts(graph: Graph<T>, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// A new leaf on this value's graph, used to promote raw numbers to nodes.
    pub(crate) fn constant(&self, data: T) -> Value<T> {
        self.graph.value(data)
    }

    pub(crate) fn ensure_same_graph(
        &self,
        other: &Value<T>,
        operation: &str,
    ) -> Result<(), ScalarGradError> {
        if self.graph.ptr_eq(&other.graph) {
            Ok(())
        } else {
            Err(ScalarGradError::GraphMismatch {
                operation: operation.to_string(),
            })
        }
    }
}

impl<T: Scalar> Clone for Value<T> {
    fn clone(&self) -> Self {
        Value {
            graph: self.graph.clone(),
            id: self.id,
        }
    }
}
