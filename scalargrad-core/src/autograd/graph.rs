use crate::graph::GraphInner;
use crate::node::NodeId;
use crate::ops::traits::Scalar;
use log::trace;
use std::collections::HashSet;

/// Builds a topological order of every node reachable from `root`.
///
/// Each reachable node appears exactly once, strictly after all of its operands. The traversal
/// is a depth-first post-order: a node is marked visited by identity before its operands are
/// explored, and appended only once all of them have been appended. A node reached through a
/// second path is skipped.
///
/// The walk keeps its own work-stack, where each entry carries whether the node's operands were
/// already pushed, so arbitrarily deep chains do not grow the call stack.
pub(crate) fn topological_sort<T: Scalar>(graph: &GraphInner<T>, root: NodeId) -> Vec<NodeId> {
    let mut sorted_list = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((node_id, operands_pushed)) = stack.pop() {
        if operands_pushed {
            trace!("[topological_sort] Adding node {} to sorted_list", node_id);
            sorted_list.push(node_id);
            continue;
        }
        if !visited.insert(node_id) {
            trace!("[topological_sort] Node {} already visited", node_id);
            continue;
        }

        stack.push((node_id, true));
        // Reversed so operands are explored in their recorded order.
        for operand in graph.node(node_id).op.operands().into_iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
