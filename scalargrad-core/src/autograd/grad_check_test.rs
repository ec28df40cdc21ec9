use super::*;

#[test]
fn test_check_grad_accepts_correct_gradients() -> Result<(), GradCheckError> {
    let func = |x: &[Value<f64>]| -> Result<Value<f64>, ScalarGradError> {
        let prod = x[0].try_mul(&x[1])?;
        Ok((prod + x[0].tanh()).exp())
    };
    check_grad(func, &[0.4, -0.7], &GradCheckConfig::default())
}

#[test]
fn test_check_grad_surfaces_forward_errors() {
    let func = |x: &[Value<f64>]| x[0].powf(f64::NAN);
    let result = check_grad(func, &[1.0], &GradCheckConfig::default());
    assert!(matches!(
        result,
        Err(GradCheckError::ForwardPass(ScalarGradError::InvalidExponent { .. }))
    ));
}

#[test]
fn test_check_grad_reports_mismatch() {
    // The derivative of relu jumps at 0: the central difference straddles the kink and sees
    // a slope of 0.5, while the backward pass reports the left-hand slope 0.
    let func = |x: &[Value<f64>]| Ok(x[0].relu());
    let result = check_grad(func, &[0.0], &GradCheckConfig::default());
    match result {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 0.0);
            approx::assert_abs_diff_eq!(numerical_grad, 0.5, epsilon = 1e-6);
        }
        other => panic!("expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_reports_non_finite_numerical_grad() {
    let func = |x: &[Value<f64>]| Ok(x[0].exp().exp());
    let result = check_grad(func, &[800.0], &GradCheckConfig::default());
    assert!(matches!(
        result,
        Err(GradCheckError::NumericalGradNonFinite { input_index: 0, .. })
    ));
}

#[test]
fn test_check_grad_f32() -> Result<(), GradCheckError> {
    let config = GradCheckConfig {
        epsilon: 1e-2,
        abs_tolerance: 1e-3,
        rel_tolerance: 1e-2,
    };
    let func = |x: &[Value<f32>]| Ok(&x[0] * &x[0] * 3.0f32 - &x[0]);
    check_grad(func, &[1.5f32], &config)
}

#[test]
fn test_check_grad_f32_default_config() -> Result<(), GradCheckError> {
    // 1.0f32 ± 1e-6 is not representable; the rounded step must be used as the denominator.
    let func = |x: &[Value<f32>]| Ok(&x[0] * &x[0]);
    check_grad(func, &[1.0f32], &GradCheckConfig::default())
}
