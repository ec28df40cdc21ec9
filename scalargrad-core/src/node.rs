use crate::autograd::backward_op::Op;
use crate::ops::traits::Scalar;
use std::fmt;

/// Stable handle of a node inside its [`Graph`](crate::graph::Graph).
///
/// Ids are handed out in creation order and never reused, so two ids from the same graph
/// denote the same node iff they are equal. Node identity never depends on the node's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage of a single scalar node.
///
/// `data` is fixed once the node is created (leaves excepted, see
/// [`Value::set_data`](crate::Value::set_data)); `grad` only ever accumulates, apart from
/// seeding the root of a backward pass and explicit resets.
#[derive(Debug, Clone)]
pub(crate) struct NodeData<T: Scalar> {
    pub(crate) data: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    pub(crate) label: Option<String>,
}

impl<T: Scalar> NodeData<T> {
    pub(crate) fn new(data: T, op: Op<T>) -> Self {
        NodeData {
            data,
            grad: T::zero(),
            op,
            label: None,
        }
    }

    pub(crate) fn leaf(data: T) -> Self {
        Self::new(data, Op::Leaf)
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}
