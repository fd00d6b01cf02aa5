//! Hyperbolic functions, built from exponential vectors
//!
//! `tanh` also has a direct Faà di Bruno expansion over the derivatives of
//! the outer tanh, used below the crossover order.

use super::{TaylorContext, at};
use crate::error::DiffError;
use crate::traits::MathScalar;

impl<T: MathScalar> TaylorContext<T> {
    /// `(exp(u), exp(−u))`
    fn exp_pair(&mut self, u: &[T], order: usize) -> (Vec<T>, Vec<T>) {
        let plus = self.exp(u, order);
        let minus = self.exp(&Self::negate(u), order);
        (plus, minus)
    }

    pub(crate) fn sinh(&mut self, u: &[T], order: usize) -> Vec<T> {
        let (p, m) = self.exp_pair(u, order);
        let mut f: Vec<T> = p.iter().zip(&m).map(|(&a, &b)| (a - b) / T::two()).collect();
        f[0] = at(u, 0).sinh();
        f
    }

    pub(crate) fn cosh(&mut self, u: &[T], order: usize) -> Vec<T> {
        let (p, m) = self.exp_pair(u, order);
        let mut f: Vec<T> = p.iter().zip(&m).map(|(&a, &b)| (a + b) / T::two()).collect();
        f[0] = at(u, 0).cosh();
        f
    }

    pub(crate) fn csch(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if at(u, 0).is_zero() {
            return Err(DiffError::Singularity { function: "csch" });
        }
        let s = self.sinh(u, order);
        self.reciprocal(&s, order)
    }

    pub(crate) fn sech(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let c = self.cosh(u, order);
        self.reciprocal(&c, order)
    }

    /// `(1 − e, 1 + e, s)` with `e = exp(−2s·u)` and `s` the sign of `u(0)`.
    ///
    /// `tanh u = s (1 − e)/(1 + e)`. The exponent is never positive at the
    /// point, so `e ≤ 1` and nothing overflows for large arguments.
    fn tanh_parts(&mut self, u: &[T], order: usize) -> (Vec<T>, Vec<T>, T) {
        let sign = if at(u, 0) < T::zero() { -T::one() } else { T::one() };
        let k = -T::two() * sign;
        let scaled: Vec<T> = u.iter().map(|&a| a * k).collect();
        let e = self.exp(&scaled, order);

        let mut num = Self::negate(&e);
        num[0] += T::one();
        let mut den = e;
        den[0] += T::one();
        (num, den, sign)
    }

    pub(crate) fn tanh(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if order < self.crossover() {
            Ok(self.tanh_direct(u, order))
        } else {
            self.tanh_reduced(u, order)
        }
    }

    /// Faà di Bruno over the outer derivatives of `t = tanh y`, which follow
    /// from `t' = 1 − t²`: `t(m+1) = −Σ_{i=0..m} C(m,i) t(i) t(m−i)` for `m ≥ 1`
    pub(crate) fn tanh_direct(&mut self, u: &[T], order: usize) -> Vec<T> {
        let t0 = at(u, 0).tanh();
        if order == 0 {
            return vec![t0];
        }

        self.binomials.ensure(order);
        let c = &self.binomials;
        let mut t = Vec::with_capacity(order + 1);
        t.push(t0);
        t.push(T::one() - t0 * t0);
        for m in 1..order {
            let sum = (0..=m).fold(T::zero(), |acc, i| acc + c.get(m, i) * t[i] * t[m - i]);
            t.push(-sum);
        }

        self.compose(u, t0, &t[1..], order)
    }

    /// `s (1 − e)/(1 + e)` through the quotient recurrence
    pub(crate) fn tanh_reduced(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let (num, den, sign) = self.tanh_parts(u, order);
        let q = self.div(&num, &den, order)?;
        Ok(Self::scale(&q, sign, order))
    }

    pub(crate) fn coth(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if at(u, 0).is_zero() {
            return Err(DiffError::Singularity { function: "coth" });
        }
        let (num, den, sign) = self.tanh_parts(u, order);
        let q = self.div(&den, &num, order)?;
        Ok(Self::scale(&q, sign, order))
    }
}
