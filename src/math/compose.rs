//! Faà di Bruno composition
//!
//! `f = g(u)` where the derivatives of the outer function `g` at `u(0)` are
//! known in closed form: `f(n) = Σ_{k=1..n} g(k) B_{n,k}(u(1), …, u(n−k+1))`.
//! Building the Bell table costs O(n³), so callers use this below the
//! crossover order only.

use super::{TaylorContext, at};
use crate::traits::MathScalar;

impl<T: MathScalar> TaylorContext<T> {
    /// Partial Bell polynomials in `u(1), u(2), …`:
    /// `B_{n,k} = Σ_{i=1..n−k+1} C(n−1,i−1) u(i) B_{n−i,k−1}`
    pub(crate) fn bell_table(&mut self, u: &[T], order: usize) -> Vec<Vec<T>> {
        self.binomials.ensure(order);
        let c = &self.binomials;
        let mut bell = vec![vec![T::zero(); order + 1]; order + 1];
        bell[0][0] = T::one();
        for n in 1..=order {
            for k in 1..=n {
                let mut acc = T::zero();
                for i in 1..=(n - k + 1) {
                    acc += c.get(n - 1, i - 1) * at(u, i) * bell[n - i][k - 1];
                }
                bell[n][k] = acc;
            }
        }
        bell
    }

    /// Derivatives of `g(u)` given `value = g(u(0))` and
    /// `outer[k − 1] = g(k)(u(0))` for `k = 1 ..= order`
    pub(crate) fn compose(&mut self, u: &[T], value: T, outer: &[T], order: usize) -> Vec<T> {
        let bell = self.bell_table(u, order);
        let mut f = Vec::with_capacity(order + 1);
        f.push(value);
        for n in 1..=order {
            f.push((1..=n).fold(T::zero(), |acc, k| acc + outer[k - 1] * bell[n][k]));
        }
        f
    }
}
