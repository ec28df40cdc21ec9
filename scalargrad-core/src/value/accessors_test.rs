use crate::autograd::backward_op::{Op, OpKind};
use crate::error::ScalarGradError;
use crate::graph::Graph;

#[test]
fn test_leaf_accessors() {
    let graph: Graph = Graph::new();
    let x = graph.value(1.5);
    assert_eq!(x.data(), 1.5);
    assert_eq!(x.grad(), 0.0);
    assert!(x.is_leaf());
    assert_eq!(x.op_kind(), OpKind::Leaf);
    assert!(x.operands().is_empty());
    assert_eq!(x.label(), None);
}

#[test]
fn test_operands_of_self_combination() {
    let graph: Graph = Graph::new();
    let x = graph.value(3.0);
    let y = &x + &x;
    let operands = y.operands();
    assert_eq!(operands.len(), 1);
    assert!(operands[0].same_node(&x));
    assert_eq!(y.op(), Op::Add(x.id(), x.id()));
    assert_eq!(y.op_kind(), OpKind::Add);
}

#[test]
fn test_same_node_is_identity_not_value() {
    let graph: Graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(2.0);
    assert!(a.same_node(&a.clone()));
    assert!(!a.same_node(&b));

    let other: Graph = Graph::new();
    let c = other.value(2.0);
    // same index, different arena
    assert_eq!(a.id(), c.id());
    assert!(!a.same_node(&c));
}

#[test]
fn test_with_label() {
    let graph: Graph = Graph::new();
    let e = (graph.value(2.0) * graph.value(-3.0)).with_label("e");
    assert_eq!(e.label().as_deref(), Some("e"));
    assert_eq!(e.data(), -6.0);
}

#[test]
fn test_set_data_on_leaf() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let w = graph.value(0.25);
    let y = &w * 2.0;
    w.set_data(1.0)?;
    assert_eq!(w.data(), 1.0);
    // derived nodes keep the value they were built with
    assert_eq!(y.data(), 0.5);
    assert_eq!((&w * 2.0).data(), 2.0);
    Ok(())
}

#[test]
fn test_set_data_rejects_derived_nodes() {
    let graph: Graph = Graph::new();
    let y = graph.value(1.0).exp();
    assert_eq!(
        y.set_data(0.0),
        Err(ScalarGradError::NotALeaf {
            operation: "set_data".to_string()
        })
    );
}

#[test]
fn test_zero_grad_single_node() {
    let graph: Graph = Graph::new();
    let a = graph.value(2.0);
    let b = graph.value(5.0);
    let c = &a * &b;
    c.backward();
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 2.0);
}
