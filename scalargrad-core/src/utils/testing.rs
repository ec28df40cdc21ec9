use crate::ops::traits::Scalar;
use crate::value::Value;

/// Checks that each value's gradient is within `tolerance` of the expected one.
/// Panics with the offending index otherwise.
pub fn check_grads_near<T: Scalar>(values: &[&Value<T>], expected: &[T], tolerance: T) {
    assert_eq!(values.len(), expected.len(), "Gradient count mismatch");
    for (i, (value, &e)) in values.iter().zip(expected).enumerate() {
        let actual = value.grad();
        let diff = (actual - e).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "Gradient mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, value, actual, e, diff, tolerance
            );
        }
    }
}

/// Checks that each value's forward data is within `tolerance` of the expected one.
pub fn check_data_near<T: Scalar>(values: &[&Value<T>], expected: &[T], tolerance: T) {
    assert_eq!(values.len(), expected.len(), "Data count mismatch");
    for (i, (value, &e)) in values.iter().zip(expected).enumerate() {
        let actual = value.data();
        let diff = (actual - e).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "Data mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, value, actual, e, diff, tolerance
            );
        }
    }
}
