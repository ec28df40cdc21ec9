use crate::graph::Graph;
use crate::ops::traits::Scalar;
use crate::value::Value;
use rand::Rng;

/// Half-open interval weights are drawn from.
pub const INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// Creates a leaf parameter drawn uniformly from [`INIT_RANGE`].
pub fn uniform<T: Scalar, R: Rng + ?Sized>(graph: &Graph<T>, rng: &mut R) -> Value<T> {
    let sample: f64 = rng.gen_range(INIT_RANGE.0..INIT_RANGE.1);
    graph.value(T::from_f64_lossy(sample))
}

/// Creates `n` uniform parameters.
pub fn uniform_n<T: Scalar, R: Rng + ?Sized>(graph: &Graph<T>, n: usize, rng: &mut R) -> Vec<Value<T>> {
    (0..n).map(|_| uniform(graph, rng)).collect()
}

/// Creates a leaf parameter initialized to zero.
pub fn zeros<T: Scalar>(graph: &Graph<T>) -> Value<T> {
    graph.value(T::zero())
}
