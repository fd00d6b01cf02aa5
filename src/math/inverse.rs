//! Inverse circular functions
//!
//! `asin` and `atan` have two strategies. Below the crossover order they
//! expand directly with Faà di Bruno over the known derivatives of
//! `(1 − y²)^(−1/2)` and `(1 + y²)^(−1)`; from it on, the derivative
//! `u' / sqrt(1 − u²)` or `u' / (1 + u²)` is expanded one order lower with
//! the quotient recurrence. Both produce the same vector up to rounding.
//! `acos`, `acsc` and `asec` reduce to `asin`; `acot` to `atan`.

use super::{TaylorContext, at, shifted};
use crate::error::DiffError;
use crate::traits::MathScalar;

impl<T: MathScalar> TaylorContext<T> {
    pub(crate) fn asin(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        self.asin_named(u, order, "asin")
    }

    fn asin_named(
        &mut self,
        u: &[T],
        order: usize,
        function: &'static str,
    ) -> Result<Vec<T>, DiffError> {
        let u0 = at(u, 0);
        let domain = || DiffError::InverseTrigDomain { function };
        if u0.abs() > T::one() {
            return Err(domain());
        }
        if order == 0 {
            return Ok(vec![u0.asin()]);
        }
        // Derivative blows up at ±1
        if u0.abs() == T::one() {
            return Err(domain());
        }

        if order < self.crossover() {
            Ok(self.asin_direct(u, order))
        } else {
            self.asin_reduced(u, order)
        }
    }

    /// Faà di Bruno with `g(k) = h(k−1)`, where `h = (1 − y²)^(−1/2)` obeys
    /// `(1 − y²) h(m+1) = (2m+1) y h(m) + m² h(m−1)`.
    pub(crate) fn asin_direct(&mut self, u: &[T], order: usize) -> Vec<T> {
        let y = at(u, 0);
        let one_minus = T::one() - y * y;

        let mut h = Vec::with_capacity(order);
        h.push(one_minus.sqrt().recip());
        for m in 0..order.saturating_sub(1) {
            let mf = T::from_index(m);
            let prev = if m == 0 { T::zero() } else { h[m - 1] };
            let next = ((T::two() * mf + T::one()) * y * h[m] + mf * mf * prev) / one_minus;
            h.push(next);
        }

        self.compose(u, y.asin(), &h, order)
    }

    /// `[asin u(0)] ++ (u' / sqrt(1 − u²))` at order − 1
    pub(crate) fn asin_reduced(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let m = order - 1;
        let du = shifted(u, order);
        let square = self.mul(u, u, m);
        let rest = Self::sub(&[T::one()], &square, m);
        let root = self.sqrt(&rest, m)?;
        let tail = self.div(&du, &root, m)?;

        let mut f = Vec::with_capacity(order + 1);
        f.push(at(u, 0).asin());
        f.extend(tail);
        Ok(f)
    }

    /// `acos = π/2 − asin`
    pub(crate) fn acos(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let mut f = Self::negate(&self.asin_named(u, order, "acos")?);
        f[0] = at(u, 0).acos();
        Ok(f)
    }

    /// `acsc u = asin(1/u)`
    pub(crate) fn acsc(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if at(u, 0).abs() < T::one() {
            return Err(DiffError::InverseTrigDomain { function: "acsc" });
        }
        let r = self.reciprocal(u, order)?;
        self.asin_named(&r, order, "acsc")
    }

    /// `asec u = acos(1/u)`
    pub(crate) fn asec(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if at(u, 0).abs() < T::one() {
            return Err(DiffError::InverseTrigDomain { function: "asec" });
        }
        let r = self.reciprocal(u, order)?;
        let mut f = Self::negate(&self.asin_named(&r, order, "asec")?);
        f[0] = at(&r, 0).acos();
        Ok(f)
    }

    pub(crate) fn atan(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        if order == 0 {
            return Ok(vec![at(u, 0).atan()]);
        }
        if order < self.crossover() {
            Ok(self.atan_direct(u, order))
        } else {
            self.atan_reduced(u, order)
        }
    }

    /// Faà di Bruno with `g(k) = p(k−1)`, where `p = (1 + y²)^(−1)` obeys
    /// `(1 + y²) p(m+1) = −2(m+1) y p(m) − m(m+1) p(m−1)`.
    pub(crate) fn atan_direct(&mut self, u: &[T], order: usize) -> Vec<T> {
        let y = at(u, 0);
        let one_plus = T::one() + y * y;

        let mut p = Vec::with_capacity(order);
        p.push(one_plus.recip());
        for m in 0..order.saturating_sub(1) {
            let mf = T::from_index(m);
            let m1 = mf + T::one();
            let prev = if m == 0 { T::zero() } else { p[m - 1] };
            let next = -(T::two() * m1 * y * p[m] + mf * m1 * prev) / one_plus;
            p.push(next);
        }

        self.compose(u, y.atan(), &p, order)
    }

    /// `[atan u(0)] ++ (u' / (1 + u²))` at order − 1
    pub(crate) fn atan_reduced(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let m = order - 1;
        let du = shifted(u, order);
        let square = self.mul(u, u, m);
        let den = Self::add(&[T::one()], &square, m);
        let tail = self.div(&du, &den, m)?;

        let mut f = Vec::with_capacity(order + 1);
        f.push(at(u, 0).atan());
        f.extend(tail);
        Ok(f)
    }

    /// `acot = π/2 − atan`, valued in `(0, π)`
    pub(crate) fn acot(&mut self, u: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let mut f = Self::negate(&self.atan(u, order)?);
        f[0] = T::FRAC_PI_2() - at(u, 0).atan();
        Ok(f)
    }
}
