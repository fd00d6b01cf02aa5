//! Closed-form checks of full derivative vectors

use crate::{Derivatives, DiffError, Differentiator, Expr, derivatives};
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI};

fn assert_vec_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{:?} vs {:?}",
        actual,
        expected
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = tol, max_relative = tol);
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

#[test]
fn test_variable() {
    assert_eq!(derivatives("x", 1, 5.0).unwrap(), vec![5.0, 1.0]);
    assert_eq!(derivatives("x", 0, 5.0).unwrap(), vec![5.0]);
    assert_eq!(derivatives("x", 3, 5.0).unwrap(), vec![5.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_square() {
    assert_eq!(derivatives("mul(x,x)", 2, 3.0).unwrap(), vec![9.0, 6.0, 2.0]);
}

#[test]
fn test_sine_at_zero() {
    let d = derivatives("sin(x)", 4, 0.0).unwrap();
    assert_vec_close(&d, &[0.0, 1.0, 0.0, -1.0, 0.0], 1e-12);
}

#[test]
fn test_reciprocal_closed_form() {
    let order = 8;
    let d = derivatives("div(1,x)", order, 2.0).unwrap();
    let expected: Vec<f64> = (0..=order)
        .map(|n| {
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            sign * factorial(n) / 2.0_f64.powi(n as i32 + 1)
        })
        .collect();
    assert_vec_close(&d, &expected, 1e-12);
}

#[test]
fn test_pole_errors() {
    assert_eq!(derivatives("div(1,x)", 0, 0.0), Err(DiffError::DivisionByZero));
    assert_eq!(
        derivatives("tan(x)", 1, FRAC_PI_2),
        Err(DiffError::Singularity { function: "tan" })
    );
    assert_eq!(
        derivatives("cot(x)", 2, PI),
        Err(DiffError::Singularity { function: "cot" })
    );
}

#[test]
fn test_constant_expressions_compact() {
    assert_eq!(derivatives("pow(2,10)", 7, 1.0).unwrap(), vec![1024.0]);
    assert_eq!(derivatives("3", 5, 0.0).unwrap(), vec![3.0]);
    let d = derivatives("sin(div(3.14159265358979323846,2))", 9, 4.0).unwrap();
    assert_eq!(d.len(), 1);
    assert_relative_eq!(d[0], 1.0);
}

#[test]
fn test_exponential_and_logarithm() {
    let d = derivatives("exp(x)", 10, 0.0).unwrap();
    assert_vec_close(&d, &[1.0; 11], 1e-12);

    // ln(x)(n) at 1 = (−1)^(n−1) (n−1)!
    let d = derivatives("ln(x)", 5, 1.0).unwrap();
    assert_vec_close(&d, &[0.0, 1.0, -1.0, 2.0, -6.0, 24.0], 1e-12);
}

#[test]
fn test_square_root_boundaries() {
    assert_eq!(derivatives("sqrt(x)", 0, 0.0).unwrap(), vec![0.0]);
    assert_eq!(
        derivatives("sqrt(x)", 1, 0.0),
        Err(DiffError::SqrtBranchPoint)
    );
    assert_eq!(
        derivatives("sqrt(x)", 0, -1.0),
        Err(DiffError::SqrtOfNegative)
    );
}

#[test]
fn test_pythagorean_identity() {
    let d = derivatives("add(pow(sin(x),2),pow(cos(x),2))", 6, 0.7).unwrap();
    assert_vec_close(&d, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-9);
}

#[test]
fn test_exp_of_ln_is_identity() {
    let d = derivatives("exp(ln(x))", 4, 2.0).unwrap();
    assert_vec_close(&d, &[2.0, 1.0, 0.0, 0.0, 0.0], 1e-9);
}

#[test]
fn test_negative_constant_exponent() {
    let a = derivatives("pow(x,sub(0,1))", 5, 2.0).unwrap();
    let b = derivatives("div(1,x)", 5, 2.0).unwrap();
    assert_vec_close(&a, &b, 1e-12);
}

#[test]
fn test_hyperbolic_identity() {
    // cosh² − sinh² = 1
    let d = derivatives("sub(pow(cosh(x),2),pow(sinh(x),2))", 5, 0.4).unwrap();
    assert_vec_close(&d, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-9);
}

#[test]
fn test_inverse_round_trip() {
    // sin(asin(x)) = x on (−1, 1)
    let d = derivatives("sin(asin(x))", 5, 0.3).unwrap();
    assert_vec_close(&d, &[0.3, 1.0, 0.0, 0.0, 0.0, 0.0], 1e-9);

    // tan(atan(x)) = x
    let d = derivatives("tan(atan(x))", 4, 1.7).unwrap();
    assert_vec_close(&d, &[1.7, 1.0, 0.0, 0.0, 0.0], 1e-9);
}

#[test]
fn test_acos_plus_asin() {
    let a = derivatives("add(asin(x),acos(x))", 6, -0.2).unwrap();
    assert_vec_close(&a, &[FRAC_PI_2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-9);

    let b = derivatives("add(atan(x),acot(x))", 6, 0.9).unwrap();
    assert_vec_close(&b, &[FRAC_PI_2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-9);
}

#[test]
fn test_asin_strategies_agree_past_crossover() {
    let expr = Expr::unary(crate::UnaryFn::Asin, Expr::variable());
    let direct = Differentiator::new()
        .crossover(100)
        .derivatives(&expr, 30, 0.3)
        .unwrap();
    let reduced = Differentiator::new()
        .crossover(0)
        .derivatives(&expr, 30, 0.3)
        .unwrap();
    assert_vec_close(direct.as_slice(), reduced.as_slice(), 1e-7);
}

#[test]
fn test_general_power() {
    // x^x at 1: 1, 1, 2, 3, 8
    let d = derivatives("pow(x,x)", 4, 1.0).unwrap();
    assert_vec_close(&d, &[1.0, 1.0, 2.0, 3.0, 8.0], 1e-12);
}

#[test]
fn test_general_power_domain_ignores_order() {
    for point in [-1.0, 0.0] {
        for order in [0, 1, 4] {
            assert!(
                matches!(
                    derivatives("pow(x,x)", order, point),
                    Err(DiffError::PowDomain(_))
                ),
                "order {} at {}",
                order,
                point
            );
        }
    }
}

#[test]
fn test_taylor_coefficients() {
    let mut engine = Differentiator::new();
    let d = engine.derivatives_str("exp(mul(2,x))", 4, 0.0).unwrap();
    let coefficients = d.taylor_coefficients();
    assert_vec_close(
        &coefficients,
        &[1.0, 2.0, 2.0, 4.0 / 3.0, 2.0 / 3.0],
        1e-12,
    );
}

#[test]
fn test_invalid_literal_in_built_tree() {
    let mut engine = Differentiator::<f64>::new();
    assert_eq!(
        engine.derivatives(&Expr::number("1e5e"), 0, 0.0),
        Err(DiffError::InvalidNumber("1e5e".to_string()))
    );
}

#[test]
fn test_engine_reuse_across_orders() {
    let mut engine = Differentiator::new();
    let high = engine.derivatives_str("exp(x)", 200, 0.0).unwrap();
    let low = engine.derivatives_str("exp(x)", 3, 0.0).unwrap();
    assert_eq!(high.len(), 201);
    assert_eq!(low, Derivatives::Series(vec![1.0; 4]));
}
