use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    /// `powf` only accepts a fixed real exponent.
    #[error("Invalid exponent {exponent}: power only supports a finite real exponent")]
    InvalidExponent { exponent: f64 },

    #[error("Cannot {operation} values that belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Operation '{operation}' requires a leaf node, but the node was produced by an operation")]
    NotALeaf { operation: String },

    #[error("Invalid network architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },
}
