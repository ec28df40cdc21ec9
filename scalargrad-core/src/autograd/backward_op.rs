use crate::node::{NodeData, NodeId};
use crate::ops::traits::Scalar;
use std::fmt;

/// The primitive that produced a node, together with the operand handles its gradient rule
/// needs.
///
/// The variant *is* the propagation rule: [`Op::propagate`] dispatches on it. Binary variants
/// keep both operand handles even when they are the same node (`x + x`), so that node receives
/// one contribution per use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// Input or constant; propagates nothing.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Base and fixed exponent.
    Pow(NodeId, T),
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
    /// Operand and negative slope.
    LeakyRelu(NodeId, T),
}

/// Diagnostic tag naming the primitive that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow,
    Exp,
    Tanh,
    Relu,
    LeakyRelu,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            OpKind::Leaf => "",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Pow => "**",
            OpKind::Exp => "exp",
            OpKind::Tanh => "tanh",
            OpKind::Relu => "ReLU",
            OpKind::LeakyRelu => "LeakyReLU",
        };
        f.write_str(symbol)
    }
}

impl<T: Scalar> Op<T> {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow(..) => OpKind::Pow,
            Op::Exp(_) => OpKind::Exp,
            Op::Tanh(_) => OpKind::Tanh,
            Op::Relu(_) => OpKind::Relu,
            Op::LeakyRelu(..) => OpKind::LeakyRelu,
        }
    }

    /// Operands for traversal, deduplicated by identity.
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => {
                if a == b {
                    vec![a]
                } else {
                    vec![a, b]
                }
            }
            Op::Pow(a, _) | Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) | Op::LeakyRelu(a, _) => {
                vec![a]
            }
        }
    }

    /// Accumulates the gradient of node `out` (which this op produced) into its operands.
    ///
    /// Only operand grads are written, never `out`'s own.
    pub(crate) fn propagate(&self, out: NodeId, nodes: &mut [NodeData<T>]) {
        let g = nodes[out.0].grad;
        let out_data = nodes[out.0].data;
        match *self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                nodes[a.0].grad += g;
                nodes[b.0].grad += g;
            }
            Op::Mul(a, b) => {
                let (a_data, b_data) = (nodes[a.0].data, nodes[b.0].data);
                nodes[a.0].grad += b_data * g;
                nodes[b.0].grad += a_data * g;
            }
            Op::Pow(a, exponent) => {
                let base = nodes[a.0].data;
                nodes[a.0].grad += exponent * base.powf(exponent - T::one()) * g;
            }
            Op::Exp(a) => {
                nodes[a.0].grad += out_data * g;
            }
            Op::Tanh(a) => {
                nodes[a.0].grad += (T::one() - out_data * out_data) * g;
            }
            Op::Relu(a) => {
                if out_data > T::zero() {
                    nodes[a.0].grad += g;
                }
            }
            Op::LeakyRelu(a, alpha) => {
                nodes[a.0].grad += if out_data > T::zero() { g } else { alpha * g };
            }
        }
    }
}

impl<T: Scalar> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow(_, exponent) => write!(f, "**{}", exponent),
            other => write!(f, "{}", other.kind()),
        }
    }
}
