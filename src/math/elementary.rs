//! exp, ln, sqrt and the three shapes of pow

use super::{BinomialTable, Derivatives, TaylorContext, at};
use crate::error::DiffError;
use crate::traits::MathScalar;
use num_traits::Zero;
use std::ops::{Add, Mul};

/// Derivatives of `f = exp(w)` given `f(0) = f0`.
///
/// From `f' = f·w'` and Leibniz: `f(n) = Σ_{i=1..n} C(n−1,i−1) f(n−i) w(i)`.
/// Generic over the value type so the same recurrence runs on complex
/// arguments for sin and cos.
pub(crate) fn exp_recurrence<T, S>(binomials: &BinomialTable<T>, w: &[S], f0: S, order: usize) -> Vec<S>
where
    T: MathScalar,
    S: Copy + Zero + Add<Output = S> + Mul<Output = S> + Mul<T, Output = S>,
{
    let mut f = Vec::with_capacity(order + 1);
    f.push(f0);
    for n in 1..=order {
        let hi = n.min(w.len().saturating_sub(1));
        let mut acc = S::zero();
        for i in 1..=hi {
            acc = acc + f[n - i] * w[i] * binomials.get(n - 1, i - 1);
        }
        f.push(acc);
    }
    f
}

impl<T: MathScalar> TaylorContext<T> {
    pub(crate) fn exp(&mut self, u: &[T], order: usize) -> Vec<T> {
        self.binomials.ensure(order);
        exp_recurrence(&self.binomials, u, at(u, 0).exp(), order)
    }

    /// From `u·f' = u'`: `f(n) = (u(n) − Σ_{i=1..n−1} C(n−1,i) f(n−i) u(i)) / u(0)`
    pub(crate) fn ln(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let u0 = at(u, 0);
        if u0 <= T::zero() {
            return Err(DiffError::LogOfNonPositive);
        }

        self.binomials.ensure(order);
        let c = &self.binomials;
        let mut f = Vec::with_capacity(order + 1);
        f.push(u0.ln());
        for n in 1..=order {
            let mut acc = at(u, n);
            for i in 1..n.min(u.len()) {
                acc -= c.get(n - 1, i) * f[n - i] * u[i];
            }
            f.push(acc / u0);
        }
        Ok(f)
    }

    /// From `f² = u`: `f(n) = (u(n) − Σ_{i=1..n−1} C(n,i) f(i) f(n−i)) / 2f(0)`
    pub(crate) fn sqrt(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let u0 = at(u, 0);
        if u0 < T::zero() {
            return Err(DiffError::SqrtOfNegative);
        }
        let f0 = u0.sqrt();
        if order == 0 {
            return Ok(vec![f0]);
        }
        if u0.is_zero() {
            return Err(DiffError::SqrtBranchPoint);
        }

        self.binomials.ensure(order);
        let c = &self.binomials;
        let two_f0 = T::two() * f0;
        let mut f = Vec::with_capacity(order + 1);
        f.push(f0);
        for n in 1..=order {
            let mut acc = at(u, n);
            for i in 1..n {
                acc -= c.get(n, i) * f[i] * f[n - i];
            }
            f.push(acc / two_f0);
        }
        Ok(f)
    }

    /// `u ^ v`, dispatching on which side is constant.
    ///
    /// The shape follows the operands' tags, never their lengths: a series
    /// truncated to one entry at order 0 still takes the general path.
    pub(crate) fn pow(
        &mut self,
        u: &Derivatives<T>,
        v: &Derivatives<T>,
        order: usize,
    ) -> Result<Vec<T>, DiffError> {
        let (u, v) = match (u, v) {
            (_, Derivatives::Constant(c)) => {
                return self.pow_constant_exponent(u.as_slice(), *c, order);
            }
            (Derivatives::Constant(b), Derivatives::Series(v)) => {
                return self.pow_constant_base(*b, v, order);
            }
            (Derivatives::Series(u), Derivatives::Series(v)) => (u, v),
        };

        // u^v = exp(v·ln u)
        if at(u, 0) <= T::zero() {
            return Err(DiffError::PowDomain(
                "base must be positive when both base and exponent vary",
            ));
        }
        let log = self.ln(u, order)?;
        let product = self.mul(v, &log, order);
        Ok(self.exp(&product, order))
    }

    /// `u ^ c` for constant `c`.
    ///
    /// Away from zero, from `u·f' = c·u'·f` differentiated `n−1` times:
    /// `u(0) f(n) = c Σ_{j=0..n−1} C(n−1,j) u(j+1) f(n−1−j) − Σ_{j=1..n−1} C(n−1,j) u(j) f(n−j)`
    pub(crate) fn pow_constant_exponent(
        &mut self,
        u: &[T],
        c: T,
        order: usize,
    ) -> Result<Vec<T>, DiffError> {
        if c.is_zero() {
            let mut f = vec![T::zero(); order + 1];
            f[0] = T::one();
            return Ok(f);
        }

        let u0 = at(u, 0);
        let integral = c.is_integral();
        if u0.is_zero() {
            return match (integral, c > T::zero()) {
                (true, true) => Ok(self.pow_integer_at_root(u, c, order)),
                (true, false) => Err(DiffError::DivisionByZero),
                (false, true) if order == 0 => Ok(vec![T::zero()]),
                (false, _) => Err(DiffError::PowDomain(
                    "fractional power is not differentiable at zero",
                )),
            };
        }
        if u0 < T::zero() && !integral {
            return Err(DiffError::PowDomain("fractional power of a negative base"));
        }

        self.binomials.ensure(order);
        let b = &self.binomials;
        let mut f = Vec::with_capacity(order + 1);
        f.push(u0.powf(c));
        for n in 1..=order {
            let mut lead = T::zero();
            for j in 0..n.min(u.len().saturating_sub(1)) {
                lead += b.get(n - 1, j) * u[j + 1] * f[n - 1 - j];
            }
            let mut acc = c * lead;
            for j in 1..n.min(u.len()) {
                acc -= b.get(n - 1, j) * u[j] * f[n - j];
            }
            f.push(acc / u0);
        }
        Ok(f)
    }

    /// `u ^ k` for a positive integer `k` where `u(0) = 0`.
    ///
    /// The root has multiplicity at least `k`, so every derivative below `k`
    /// vanishes; otherwise the power is built by repeated squaring.
    fn pow_integer_at_root(&mut self, u: &[T], c: T, order: usize) -> Vec<T> {
        let zeros = vec![T::zero(); order + 1];
        if c > T::from_index(order) {
            return zeros;
        }
        let Some(mut k) = c.to_usize() else {
            return zeros;
        };

        let mut result = vec![T::one()];
        let mut base = u.to_vec();
        while k > 0 {
            if k & 1 == 1 {
                result = self.mul(&result, &base, order);
            }
            k >>= 1;
            if k > 0 {
                base = self.mul(&base, &base, order);
            }
        }
        result
    }

    /// `b ^ v` for a constant base: `exp(v · ln b)` seeded with `b^v(0)`
    pub(crate) fn pow_constant_base(
        &mut self,
        b: T,
        v: &[T],
        order: usize,
    ) -> Result<Vec<T>, DiffError> {
        let v0 = at(v, 0);
        if b > T::zero() {
            self.binomials.ensure(order);
            let log_b = b.ln();
            let w: Vec<T> = v.iter().map(|&a| a * log_b).collect();
            return Ok(exp_recurrence(&self.binomials, &w, b.powf(v0), order));
        }
        if b.is_zero() {
            if order == 0 && v0 > T::zero() {
                return Ok(vec![T::zero()]);
            }
            return Err(DiffError::PowDomain("zero base with a varying exponent"));
        }
        Err(DiffError::PowDomain("negative base with a varying exponent"))
    }
}
