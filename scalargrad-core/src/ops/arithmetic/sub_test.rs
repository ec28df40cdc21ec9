use super::*;
use crate::graph::Graph;

#[test]
fn test_sub_forward_and_backward() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let a = graph.value(5.0);
    let b = graph.value(7.5);
    let out = sub_op(&a, &b)?;
    assert_eq!(out.data(), -2.5);
    out.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
    Ok(())
}

#[test]
fn test_sub_self_is_zero_with_cancelling_grads() -> Result<(), ScalarGradError> {
    let graph: Graph = Graph::new();
    let x = graph.value(1.25);
    let y = x.try_sub(&x)?;
    assert_eq!(y.data(), 0.0);
    y.backward();
    assert_eq!(x.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sub_graph_mismatch() {
    let a = Graph::<f64>::new().value(1.0);
    let b = Graph::<f64>::new().value(2.0);
    assert_eq!(
        sub_op(&a, &b).err(),
        Some(ScalarGradError::GraphMismatch {
            operation: "subtract".to_string()
        })
    );
}
