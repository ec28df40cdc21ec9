use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// Floating-point types the engine can differentiate over.
///
/// Strictly reserved to `f32` and `f64`; `Display` is required so nodes and diagnostics
/// can print their values.
pub trait Scalar:
    Float // Includes Num + Copy + NumCast + PartialOrd
    + NumAssignOps // AddAssign is what gradient accumulation needs
    + Debug
    + Display
    + 'static
{
    /// Converts an `f64` constant, rounding to the nearest representable value.
    fn from_f64_lossy(value: f64) -> Self;

    /// Widens (or copies) the value to `f64` for diagnostics and error reports.
    fn to_f64_lossy(self) -> f64;
}

impl Scalar for f32 {
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    fn to_f64_lossy(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process_scalar<T: Scalar>(value: T) -> T {
        let mut acc = T::zero();
        acc += value;
        acc
    }

    #[test]
    fn test_f32_impl_scalar() {
        assert_eq!(process_scalar(1.5f32), 1.5);
    }

    #[test]
    fn test_f64_impl_scalar() {
        assert_eq!(process_scalar(-2.0f64), -2.0);
    }

    #[test]
    fn test_lossy_conversions() {
        assert_eq!(f32::from_f64_lossy(0.5), 0.5f32);
        assert_eq!(0.25f32.to_f64_lossy(), 0.25f64);
        assert!(f64::from_f64_lossy(f64::NAN).is_nan());
    }
}
