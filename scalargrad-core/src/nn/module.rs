use crate::ops::traits::Scalar;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module<T: Scalar>: std::fmt::Debug {
    /// Returns every learnable parameter of the module, including those of sub-modules.
    ///
    /// The returned values are handles: updating them (e.g. with
    /// [`Value::set_data`]) updates the module.
    fn parameters(&self) -> Vec<Value<T>>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// Call before each new backward pass; gradients otherwise accumulate across passes.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
