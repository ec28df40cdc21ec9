use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_leaky_relu_positive_passes_through() {
    let graph: Graph = Graph::new();
    let x = graph.value(2.0);
    let y = x.leaky_relu();
    assert_eq!(y.data(), 2.0);
    y.backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_leaky_relu_negative_uses_default_slope() {
    let graph: Graph = Graph::new();
    let x = graph.value(-3.0);
    let y = x.leaky_relu() * 2.0;
    assert_relative_eq!(y.data(), -0.06, epsilon = 1e-12);
    y.backward();
    assert_relative_eq!(x.grad(), 0.02, epsilon = 1e-12);
}

#[test]
fn test_leaky_relu_custom_slope() {
    let graph: Graph = Graph::new();
    let x = graph.value(-1.0);
    let y = leaky_relu_op(&x, 0.2);
    assert_relative_eq!(y.data(), -0.2, epsilon = 1e-12);
    y.backward();
    assert_relative_eq!(x.grad(), 0.2, epsilon = 1e-12);
    assert_eq!(x.leaky_relu_with(0.5).data(), -0.5);
}

#[test]
fn test_leaky_relu_at_zero_uses_slope() {
    let graph: Graph = Graph::new();
    let x = graph.value(0.0);
    let y = x.leaky_relu();
    assert_eq!(y.data(), 0.0);
    y.backward();
    assert_relative_eq!(x.grad(), DEFAULT_LEAKY_RELU_ALPHA, epsilon = 1e-15);
}
