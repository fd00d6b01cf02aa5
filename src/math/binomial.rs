//! Pascal's triangle cache shared by every recurrence

use crate::traits::MathScalar;

/// Binomial coefficients `C(n, k)` for `0 ≤ k ≤ n ≤ rows`, grown on demand.
///
/// Rows are built additively, so every stored entry is exact as long as it
/// fits in the scalar's mantissa. Entries past that point are rounded, never
/// infinite, for the row counts the engine admits.
#[derive(Debug, Clone)]
pub struct BinomialTable<T> {
    rows: Vec<Vec<T>>,
}

impl<T: MathScalar> Default for BinomialTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MathScalar> BinomialTable<T> {
    pub fn new() -> Self {
        Self {
            rows: vec![vec![T::one()]],
        }
    }

    /// Highest row currently stored
    pub fn rows(&self) -> usize {
        self.rows.len() - 1
    }

    /// Extend the triangle so that row `n` exists
    pub fn ensure(&mut self, n: usize) {
        while self.rows.len() <= n {
            let prev = &self.rows[self.rows.len() - 1];
            let mut row = Vec::with_capacity(prev.len() + 1);
            row.push(T::one());
            row.extend(prev.windows(2).map(|w| w[0] + w[1]));
            row.push(T::one());
            self.rows.push(row);
        }
    }

    /// `C(n, k)`; zero outside the triangle or beyond the stored rows
    #[inline]
    pub fn get(&self, n: usize, k: usize) -> T {
        self.rows
            .get(n)
            .and_then(|row| row.get(k))
            .copied()
            .unwrap_or_else(T::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_rows() {
        let mut table = BinomialTable::<f64>::new();
        table.ensure(5);
        assert_eq!(table.rows(), 5);
        let row: Vec<f64> = (0..=5).map(|k| table.get(5, k)).collect();
        assert_eq!(row, vec![1.0, 5.0, 10.0, 10.0, 5.0, 1.0]);
        assert_eq!(table.get(0, 0), 1.0);
    }

    #[test]
    fn test_outside_triangle_is_zero() {
        let mut table = BinomialTable::<f64>::new();
        table.ensure(3);
        assert_eq!(table.get(3, 4), 0.0);
        assert_eq!(table.get(10, 1), 0.0);
    }

    #[test]
    fn test_ensure_is_incremental() {
        let mut table = BinomialTable::<f64>::new();
        table.ensure(10);
        table.ensure(4);
        assert_eq!(table.rows(), 10);
        assert_eq!(table.get(10, 5), 252.0);
        table.ensure(20);
        assert_eq!(table.get(20, 10), 184_756.0);
    }

    #[test]
    fn test_large_rows_stay_finite() {
        let mut table = BinomialTable::<f64>::new();
        table.ensure(1000);
        assert!(table.get(1000, 500).is_finite());
        assert_eq!(table.get(1000, 1), 1000.0);
    }
}
