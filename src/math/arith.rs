//! Arithmetic: sums, Leibniz products and the quotient recurrence

use super::{TaylorContext, at};
use crate::error::DiffError;
use crate::traits::MathScalar;

impl<T: MathScalar> TaylorContext<T> {
    pub(crate) fn add(u: &[T], v: &[T], order: usize) -> Vec<T> {
        (0..=order).map(|n| at(u, n) + at(v, n)).collect()
    }

    pub(crate) fn sub(u: &[T], v: &[T], order: usize) -> Vec<T> {
        (0..=order).map(|n| at(u, n) - at(v, n)).collect()
    }

    /// `c · u`
    pub(crate) fn scale(u: &[T], c: T, order: usize) -> Vec<T> {
        (0..=order).map(|n| at(u, n) * c).collect()
    }

    pub(crate) fn negate(u: &[T]) -> Vec<T> {
        u.iter().map(|&a| -a).collect()
    }

    /// Leibniz rule: `(uv)(n) = Σ C(n,i) u(n−i) v(i)`
    pub(crate) fn mul(&mut self, u: &[T], v: &[T], order: usize) -> Vec<T> {
        // A one-entry slice has no higher derivatives, so the sum collapses
        match (u, v) {
            ([c], _) => return Self::scale(v, *c, order),
            (_, [c]) => return Self::scale(u, *c, order),
            _ => {}
        }

        self.binomials.ensure(order);
        let c = &self.binomials;
        (0..=order)
            .map(|n| {
                // Only indices inside both slices contribute
                let lo = n.saturating_sub(u.len() - 1);
                let hi = n.min(v.len() - 1);
                (lo..=hi).fold(T::zero(), |acc, i| acc + c.get(n, i) * u[n - i] * v[i])
            })
            .collect()
    }

    /// `u / c` for a constant divisor
    pub(crate) fn div_constant(u: &[T], c: T, order: usize) -> Result<Vec<T>, DiffError> {
        if c.is_zero() {
            return Err(DiffError::DivisionByZero);
        }
        Ok((0..=order).map(|n| at(u, n) / c).collect())
    }

    /// Quotient from `u = f·v`: `f(n) = (u(n) − Σ_{i=1..n} C(n,i) v(i) f(n−i)) / v(0)`
    pub(crate) fn div(&mut self, u: &[T], v: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        let v0 = at(v, 0);
        if v0.is_zero() {
            return Err(DiffError::DivisionByZero);
        }

        self.binomials.ensure(order);
        let c = &self.binomials;
        let mut f: Vec<T> = Vec::with_capacity(order + 1);
        for n in 0..=order {
            let hi = n.min(v.len() - 1);
            let mut acc = at(u, n);
            for i in 1..=hi {
                acc -= c.get(n, i) * v[i] * f[n - i];
            }
            f.push(acc / v0);
        }
        Ok(f)
    }

    /// `1 / v`
    pub(crate) fn reciprocal(&mut self, v: &[T], order: usize) -> Result<Vec<T>, DiffError> {
        self.div(&[T::one()], v, order)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_add_sub_pad_constants() {
        let x = var(5.0, 2);
        assert_eq!(TaylorContext::add(&x, &[2.0], 2), vec![7.0, 1.0, 0.0]);
        assert_eq!(TaylorContext::sub(&[2.0], &x, 2), vec![-3.0, -1.0, 0.0]);
    }

    #[test]
    fn test_square() {
        let mut ctx = TaylorContext::new();
        let x = var(3.0, 2);
        assert_eq!(ctx.mul(&x, &x, 2), vec![9.0, 6.0, 2.0]);
    }

    #[test]
    fn test_mul_by_constant_fast_path() {
        let mut ctx = TaylorContext::new();
        let x = var(3.0, 3);
        assert_eq!(ctx.mul(&[2.0], &x, 3), vec![6.0, 2.0, 0.0, 0.0]);
        assert_eq!(ctx.mul(&x, &[-1.0], 3), vec![-3.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cube_matches_power_rule() {
        let mut ctx = TaylorContext::new();
        let x = var(2.0, 4);
        let sq = ctx.mul(&x, &x, 4);
        let cube = ctx.mul(&sq, &x, 4);
        assert_close(&cube, &[8.0, 12.0, 12.0, 6.0, 0.0]);
    }

    #[test]
    fn test_reciprocal_closed_form() {
        // (1/x)(n) = (−1)^n n! / x^(n+1)
        let mut ctx = TaylorContext::new();
        let x = var(2.0, 4);
        let r = ctx.reciprocal(&x, 4).unwrap();
        assert_close(&r, &[0.5, -0.25, 0.25, -0.375, 0.75]);
    }

    #[test]
    fn test_div_by_constant() {
        let mut ctx = TaylorContext::new();
        let x = var(3.0, 2);
        assert_eq!(ctx.div(&x, &[2.0], 2).unwrap(), vec![1.5, 0.5, 0.0]);
        assert_eq!(
            TaylorContext::div_constant(&x, 2.0, 2).unwrap(),
            vec![1.5, 0.5, 0.0]
        );
        assert_eq!(
            TaylorContext::div_constant(&x, 0.0, 2),
            Err(DiffError::DivisionByZero)
        );
    }

    #[test]
    fn test_division_by_zero() {
        let mut ctx = TaylorContext::new();
        let x = var(0.0, 2);
        assert_eq!(ctx.reciprocal(&x, 2), Err(DiffError::DivisionByZero));
        assert_eq!(ctx.div(&x, &[0.0], 0), Err(DiffError::DivisionByZero));
    }

    #[test]
    fn test_quotient_inverts_product() {
        let mut ctx = TaylorContext::new();
        let x = var(1.5, 5);
        let sq = ctx.mul(&x, &x, 5);
        let back = ctx.div(&sq, &x, 5).unwrap();
        assert_close(&back, &x);
    }
}
