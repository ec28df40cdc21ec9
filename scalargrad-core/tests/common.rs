use rand::rngs::StdRng;
use rand::Rng;
use scalargrad_core::autograd::OpKind;
use scalargrad_core::Value;

// Helpers shared by the integration test crates.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a random expression of depth at most `depth` over `leaves`, drawing from every
/// primitive. Leaves are picked with replacement, so sub-nodes are routinely shared.
///
/// The structure depends only on `rng`, never on the leaves' values, so re-running with an
/// identically seeded rng rebuilds the same expression on other leaves. Divisors and power
/// bases are kept away from zero so every node is differentiable.
#[allow(dead_code)]
pub(crate) fn random_expr(rng: &mut StdRng, leaves: &[Value<f64>], depth: usize) -> Value<f64> {
    if depth == 0 || rng.gen_bool(0.2) {
        return leaves[rng.gen_range(0..leaves.len())].clone();
    }
    let a = random_expr(rng, leaves, depth - 1);
    match rng.gen_range(0..10) {
        0 => &a + &random_expr(rng, leaves, depth - 1),
        1 => &a * &random_expr(rng, leaves, depth - 1),
        2 => &a - &random_expr(rng, leaves, depth - 1),
        3 => {
            let b = random_expr(rng, leaves, depth - 1);
            &a / (&b * &b + 1.0)
        }
        4 => {
            let t = a.tanh();
            (&t * &t + 0.5).powf(1.5).expect("finite exponent")
        }
        5 => -&a,
        6 => a.tanh().exp(),
        7 => a.tanh(),
        8 => a.relu(),
        _ => a.leaky_relu(),
    }
}

/// Returns `true` if some relu/leaky relu in the expression sits within `margin` of its kink.
#[allow(dead_code)]
pub(crate) fn has_kink_near_zero(root: &Value<f64>, margin: f64) -> bool {
    root.topological_order().iter().any(|node| {
        matches!(node.op_kind(), OpKind::Relu | OpKind::LeakyRelu)
            && node.operands()[0].data().abs() < margin
    })
}
