//! # Training a small MLP with plain gradient descent
//!
//! Fits a 3-4-4-1 perceptron to four labelled points by minimising the sum of squared errors.
//!
//! Each step builds the loss expression, resets the parameter gradients, runs the backward
//! pass and moves every parameter against its gradient with `set_data`. The step's nodes are
//! then discarded by truncating the graph back to the checkpoint taken after the parameters.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example train_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{Graph, ScalarGradError, Value};

const STEPS: usize = 50;
const LEARNING_RATE: f64 = 0.02;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let graph: Graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut rng)?;
    println!("{}", mlp);
    println!("{} parameters", mlp.parameters().len());
    let checkpoint = graph.len();

    for step in 0..STEPS {
        let mut predictions = Vec::with_capacity(xs.len());
        for x in &xs {
            let outputs = mlp.forward(&graph.values(x))?;
            predictions.extend(outputs);
        }

        // Sum of squared errors.
        let mut loss: Value = graph.value(0.0);
        for (prediction, &y) in predictions.iter().zip(ys.iter()) {
            let diff = prediction - y;
            loss = loss + &diff * &diff;
        }

        mlp.zero_grad();
        loss.backward();
        for p in mlp.parameters() {
            p.set_data(p.data() - LEARNING_RATE * p.grad())?;
        }

        println!(
            "Step [{}/{}], Loss: {:.6}, nodes: {}",
            step + 1,
            STEPS,
            loss.data(),
            graph.len()
        );
        graph.truncate(checkpoint);
    }

    println!("\nPredictions after training:");
    for (x, &y) in xs.iter().zip(ys.iter()) {
        let outputs = mlp.forward(&graph.values(x))?;
        println!("{:?} -> {:.4} (target {})", x, outputs[0].data(), y);
    }
    println!("Graph holds {} nodes", graph.len());
    Ok(())
}
