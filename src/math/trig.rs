//! Circular functions
//!
//! sin and cos come from one complex exponential `exp(i·u)`; the other four
//! are quotients of those two vectors. Poles are detected on the argument
//! value before any division happens.

use super::elementary::exp_recurrence;
use super::{TaylorContext, at};
use crate::error::DiffError;
use crate::traits::{MathScalar, near_multiple};
use num_complex::Complex;

impl<T: MathScalar> TaylorContext<T> {
    /// `(sin u, cos u)` as the imaginary and real parts of `exp(i·u)`
    pub(crate) fn sin_cos(&mut self, u: &[T], order: usize) -> (Vec<T>, Vec<T>) {
        self.binomials.ensure(order);
        let w: Vec<Complex<T>> = u.iter().map(|&a| Complex::new(T::zero(), a)).collect();
        let (s0, c0) = at(u, 0).sin_cos();
        let g = exp_recurrence(&self.binomials, &w, Complex::new(c0, s0), order);
        (
            g.iter().map(|z| z.im).collect(),
            g.iter().map(|z| z.re).collect(),
        )
    }

    pub(crate) fn sin(&mut self, u: &[T], order: usize) -> Vec<T> {
        self.sin_cos(u, order).0
    }

    pub(crate) fn cos(&mut self, u: &[T], order: usize) -> Vec<T> {
        self.sin_cos(u, order).1
    }

    /// Zeros of cos: `u ≡ π/2 (mod π)`
    fn at_cos_zero(&self, u0: T) -> bool {
        near_multiple(u0 - T::FRAC_PI_2(), T::PI(), self.tolerance())
    }

    /// Zeros of sin: `u ≡ 0 (mod π)`
    fn at_sin_zero(&self, u0: T) -> bool {
        near_multiple(u0, T::PI(), self.tolerance())
    }

    pub(crate) fn tan(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if self.at_cos_zero(at(u, 0)) {
            return Err(DiffError::Singularity { function: "tan" });
        }
        let (s, c) = self.sin_cos(u, order);
        self.div(&s, &c, order)
    }

    pub(crate) fn cot(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if self.at_sin_zero(at(u, 0)) {
            return Err(DiffError::Singularity { function: "cot" });
        }
        let (s, c) = self.sin_cos(u, order);
        self.div(&c, &s, order)
    }

    pub(crate) fn sec(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if self.at_cos_zero(at(u, 0)) {
            return Err(DiffError::Singularity { function: "sec" });
        }
        let c = self.cos(u, order);
        self.reciprocal(&c, order)
    }

    pub(crate) fn csc(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if self.at_sin_zero(at(u, 0)) {
            return Err(DiffError::Singularity { function: "csc" });
        }
        let s = self.sin(u, order);
        self.reciprocal(&s, order)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_sin_at_zero() {
        let mut ctx = TaylorContext::new();
        let f = ctx.sin(&var(0.0, 4), 4);
        assert_close(&f, &[0.0, 1.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_cos_cycle() {
        let mut ctx = TaylorContext::new();
        let a = 0.7_f64;
        let f = ctx.cos(&var(a, 5), 5);
        assert_close(
            &f,
            &[a.cos(), -a.sin(), -a.cos(), a.sin(), a.cos(), -a.sin()],
        );
    }

    #[test]
    fn test_sin_chain_rule() {
        // sin(3x) at 0: 0, 3, 0, −27
        let mut ctx = TaylorContext::new();
        let f = ctx.sin(&[0.0, 3.0, 0.0, 0.0], 3);
        assert_close(&f, &[0.0, 3.0, 0.0, -27.0]);
    }

    #[test]
    fn test_tan_at_quarter_pi() {
        // tan' = 1 + tan², tan'' = 2 tan (1 + tan²)
        let mut ctx = TaylorContext::new();
        let f = ctx.tan(&var(FRAC_PI_4, 2), 2).unwrap();
        assert_close(&f, &[1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_sec_and_csc() {
        let mut ctx = TaylorContext::new();
        let f = ctx.sec(&var(0.0, 2), 2).unwrap();
        assert_close(&f, &[1.0, 0.0, 1.0]);

        let f = ctx.csc(&var(FRAC_PI_2, 2), 2).unwrap();
        assert_close(&f, &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cot_at_quarter_pi() {
        // cot' = −(1 + cot²)
        let mut ctx = TaylorContext::new();
        let f = ctx.cot(&var(FRAC_PI_4, 1), 1).unwrap();
        assert_close(&f, &[1.0, -2.0]);
    }

    #[test]
    fn test_poles() {
        let mut ctx = TaylorContext::new();
        assert_eq!(
            ctx.tan(&var(FRAC_PI_2, 1), 1),
            Err(DiffError::Singularity { function: "tan" })
        );
        assert_eq!(
            ctx.sec(&var(-FRAC_PI_2, 0), 0),
            Err(DiffError::Singularity { function: "sec" })
        );
        assert_eq!(
            ctx.cot(&var(PI, 1), 1),
            Err(DiffError::Singularity { function: "cot" })
        );
        assert_eq!(
            ctx.csc(&var(0.0, 0), 0),
            Err(DiffError::Singularity { function: "csc" })
        );
    }

    #[test]
    fn test_tolerance_controls_pole_test() {
        let mut ctx = TaylorContext::new();
        let near = FRAC_PI_2 + 1e-6;
        assert!(ctx.tan(&var(near, 1), 1).is_ok());
        ctx.set_tolerance(1e-3);
        assert!(ctx.tan(&var(near, 1), 1).is_err());
    }
}
