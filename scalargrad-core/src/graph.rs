use crate::autograd::backward_op::Op;
use crate::node::{NodeData, NodeId};
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Arena holding the nodes of one graph.
#[derive(Debug)]
pub(crate) struct GraphInner<T: Scalar> {
    pub(crate) nodes: Vec<NodeData<T>>,
}

impl<T: Scalar> GraphInner<T> {
    pub(crate) fn node(&self, id: NodeId) -> &NodeData<T> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut NodeData<T> {
        &mut self.nodes[id.0]
    }
}

/// Shared owner of every node created while evaluating expressions.
///
/// A `Graph` is a cheap handle: cloning it shares the same arena. Nodes are appended by leaf
/// constructors and by every operation, and live until the arena is dropped or they are
/// discarded with [`Graph::truncate`].
///
/// Values can only be combined with values from the same graph.
pub struct Graph<T: Scalar = f64> {
    inner: Rc<RefCell<GraphInner<T>>>,
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            inner: Rc::new(RefCell::new(GraphInner { nodes: Vec::new() })),
        }
    }

    /// Creates a new leaf node holding `data`.
    ///
    /// Every call creates a distinct node, even for equal values.
    pub fn value(&self, data: T) -> Value<T> {
        let id = self.push(NodeData::leaf(data));
        Value::from_parts(self.clone(), id)
    }

    /// Creates a new leaf node carrying a diagnostic label.
    pub fn labeled(&self, data: T, label: impl Into<String>) -> Value<T> {
        let mut node = NodeData::leaf(data);
        node.label = Some(label.into());
        let id = self.push(node);
        Value::from_parts(self.clone(), id)
    }

    /// Creates one leaf per element of `data`, in order.
    pub fn values(&self, data: &[T]) -> Vec<Value<T>> {
        data.iter().map(|&d| self.value(d)).collect()
    }

    /// Number of nodes recorded so far.
    ///
    /// Also serves as a checkpoint for [`Graph::truncate`].
    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&self) {
        for node in self.inner.borrow_mut().nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Discards every node created after the checkpoint `len`, as returned by [`Graph::len`].
    ///
    /// Operands always precede the nodes built from them, so the nodes that remain form a
    /// complete graph. Typical use is a training loop: take the checkpoint once the parameters
    /// exist, and truncate back to it after each step's update.
    ///
    /// Handles to discarded nodes must not be used afterwards. Their ids will be handed out
    /// again to new nodes. A `len` at or beyond the current size does nothing.
    pub fn truncate(&self, len: usize) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.nodes.len();
        inner.nodes.truncate(len);
        if before > len {
            debug!("Graph::truncate: dropped {} nodes, {} remain", before - len, len);
        }
    }

    /// Returns `true` if both handles share the same arena.
    pub fn ptr_eq(&self, other: &Graph<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn push(&self, node: NodeData<T>) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        let id = NodeId(inner.nodes.len());
        inner.nodes.push(node);
        id
    }

    /// Records the result of an operation and returns its handle.
    pub(crate) fn push_op(&self, data: T, op: Op<T>) -> Value<T> {
        let id = self.push(NodeData::new(data, op));
        Value::from_parts(self.clone(), id)
    }

    pub(crate) fn borrow(&self) -> Ref<'_, GraphInner<T>> {
        self.inner.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, GraphInner<T>> {
        self.inner.borrow_mut()
    }
}

impl<T: Scalar> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Graph {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("nodes", &self.len()).finish()
    }
}
