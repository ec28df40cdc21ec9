use crate::autograd::graph::topological_sort;
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::{debug, trace, warn};

impl<T: Scalar> Value<T> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient to `1.0` (overwriting whatever it held), sorts every node it
    /// depends on, and runs each node's propagation rule once, from this node back to the
    /// leaves. Afterwards every reachable node's `grad` holds `d(self)/d(node)` *plus* whatever
    /// it held before the pass: reset gradients with [`Value::zero_grad`] or
    /// [`Graph::zero_grad`](crate::Graph::zero_grad) between independent passes.
    ///
    /// Non-finite values are not checked; NaN and infinities propagate like any other number.
    pub fn backward(&self) {
        let mut inner = self.graph.borrow_mut();
        let sorted_nodes = topological_sort(&inner, self.id);
        debug!(
            "backward: root {} reaches {} of {} nodes",
            self.id,
            sorted_nodes.len(),
            inner.nodes.len()
        );

        inner.node_mut(self.id).grad = T::one();

        // Every consumer of a node sits later in the order, so walking it in reverse
        // completes a node's grad before its own rule runs.
        for &node_id in sorted_nodes.iter().rev() {
            let op = inner.node(node_id).op;
            trace!("backward: propagating {} through '{}'", node_id, op);
            op.propagate(node_id, &mut inner.nodes);
        }

        let non_finite = sorted_nodes
            .iter()
            .filter(|id| !inner.node(**id).grad.is_finite())
            .count();
        if non_finite > 0 {
            warn!(
                "backward: {} node(s) reachable from {} ended with a non-finite gradient",
                non_finite, self.id
            );
        }
    }

    /// Every node this value depends on (itself included), each after all of its operands.
    pub fn topological_order(&self) -> Vec<Value<T>> {
        let sorted_nodes = topological_sort(&self.graph.borrow(), self.id);
        sorted_nodes
            .into_iter()
            .map(|id| Value::from_parts(self.graph.clone(), id))
            .collect()
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
