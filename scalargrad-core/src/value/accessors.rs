use crate::autograd::backward_op::{Op, OpKind};
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use crate::value::Value;

impl<T: Scalar> Value<T> {
    /// Forward value of the node.
    pub fn data(&self) -> T {
        self.graph.borrow().node(self.id).data
    }

    /// Accumulated derivative of the last backward root with respect to this node.
    pub fn grad(&self) -> T {
        self.graph.borrow().node(self.id).grad
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.graph.borrow_mut().node_mut(self.id).grad = T::zero();
    }

    /// Overwrites the value of a leaf, e.g. to apply a parameter update between passes.
    ///
    /// Nodes already derived from the leaf keep their old forward values; rebuild the
    /// expression to see the change.
    ///
    /// # Errors
    /// `NotALeaf` if the node was produced by an operation.
    pub fn set_data(&self, data: T) -> Result<(), ScalarGradError> {
        let mut inner = self.graph.borrow_mut();
        let node = inner.node_mut(self.id);
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf {
                operation: "set_data".to_string(),
            });
        }
        node.data = data;
        Ok(())
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this node lives in.
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    /// The primitive that produced this node, with its operand handles.
    pub fn op(&self) -> Op<T> {
        self.graph.borrow().node(self.id).op
    }

    pub fn op_kind(&self) -> OpKind {
        self.op().kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.borrow().node(self.id).is_leaf()
    }

    /// Direct operands of this node, deduplicated by identity.
    pub fn operands(&self) -> Vec<Value<T>> {
        self.op()
            .operands()
            .into_iter()
            .map(|id| Value::from_parts(self.graph.clone(), id))
            .collect()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.borrow().node(self.id).label.clone()
    }

    /// Attaches a diagnostic label to the node and returns the same handle.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.graph.borrow_mut().node_mut(self.id).label = Some(label.into());
        self
    }

    /// Returns `true` if both handles denote the same node.
    ///
    /// Identity, not value equality: two leaves built from the same number are different
    /// nodes.
    pub fn same_node(&self, other: &Value<T>) -> bool {
        self.id == other.id && self.graph.ptr_eq(&other.graph)
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
