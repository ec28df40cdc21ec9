use super::*;
use crate::graph::Graph;
use crate::Value;
use std::collections::HashMap;

fn sort(root: &Value<f64>) -> Vec<NodeId> {
    let inner = root.graph().borrow();
    topological_sort(&inner, root.id())
}

fn assert_operands_first(root: &Value<f64>, order: &[NodeId]) {
    let position: HashMap<NodeId, usize> = order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    assert_eq!(position.len(), order.len(), "a node appears twice in {:?}", order);
    let inner = root.graph().borrow();
    for id in order {
        for operand in inner.node(*id).op.operands() {
            assert!(
                position[&operand] < position[id],
                "operand {} sorted after its consumer {}",
                operand,
                id
            );
        }
    }
}

#[test]
fn test_leaf_root_is_its_own_order() {
    let graph: Graph = Graph::new();
    let x = graph.value(1.0);
    assert_eq!(sort(&x), vec![x.id()]);
}

#[test]
fn test_shared_operand_visited_once() {
    let graph: Graph = Graph::new();
    let x = graph.value(3.0);
    let y = &x + &x;
    let order = sort(&y);
    assert_eq!(order, vec![x.id(), y.id()]);
}

#[test]
fn test_diamond_order() {
    let graph: Graph = Graph::new();
    let x = graph.value(2.0);
    let sq = &x * &x;
    let q = &sq + &x;
    let order = sort(&q);
    assert_eq!(order.len(), 3);
    assert_eq!(order.last(), Some(&q.id()));
    assert_operands_first(&q, &order);
}

#[test]
fn test_unreachable_nodes_are_excluded() {
    let graph: Graph = Graph::new();
    let a = graph.value(1.0);
    let b = graph.value(2.0);
    let _unused = &a * &b;
    let c = a.exp();
    let order = sort(&c);
    assert_eq!(order, vec![a.id(), c.id()]);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let graph: Graph = Graph::new();
    let x = graph.value(0.5);
    let mut acc = x.clone();
    for _ in 0..200_000 {
        acc = &acc + 1.0;
    }
    let order = sort(&acc);
    // every `+ 1.0` adds one constant leaf and one sum node
    assert_eq!(order.len(), 1 + 2 * 200_000);
    assert_eq!(order.first(), Some(&x.id()));
    assert_eq!(order.last(), Some(&acc.id()));
}

#[test]
fn test_reused_subexpressions_keep_operands_first() {
    let graph: Graph = Graph::new();
    let a = graph.value(0.3);
    let b = graph.value(-1.2);
    let ab = &a * &b;
    let t = ab.tanh();
    let u = &t * &ab + &t / &a;
    let v = (&u - &b).relu() + &u * &u;
    let order = sort(&v);
    assert_operands_first(&v, &order);
    assert_eq!(order.last(), Some(&v.id()));
}
