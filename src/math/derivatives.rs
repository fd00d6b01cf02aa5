use crate::traits::MathScalar;
use std::fmt;

/// Derivative vector of a subexpression at the evaluation point.
///
/// Entry `i` is the `i`-th derivative value (not divided by `i!`). A subtree
/// that never mentions `x` is stored as a single [`Derivatives::Constant`];
/// every higher derivative of it is implicitly zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Derivatives<T> {
    /// Variable-free subtree: value only
    Constant(T),
    /// Derivatives `f(0) ..= f(order)`
    Series(Vec<T>),
}

impl<T: MathScalar> Derivatives<T> {
    /// Value at the point (entry 0)
    pub fn value(&self) -> T {
        self.get(0)
    }

    /// Entry `i`, zero past the stored length
    pub fn get(&self, i: usize) -> T {
        self.as_slice().get(i).copied().unwrap_or_else(T::zero)
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Derivatives::Constant(c) => std::slice::from_ref(c),
            Derivatives::Series(v) => v,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Derivatives::Constant(c) => vec![c],
            Derivatives::Series(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Derivatives::Constant(_))
    }

    /// Entries `0 ..= order`, zero filled
    pub fn padded(&self, order: usize) -> Vec<T> {
        (0..=order).map(|i| self.get(i)).collect()
    }

    /// Taylor coefficients `f(i) / i!`
    pub fn taylor_coefficients(&self) -> Vec<T> {
        let mut factorial = T::one();
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                if i > 1 {
                    factorial *= T::from_index(i);
                }
                d / factorial
            })
            .collect()
    }
}

impl<T: MathScalar> fmt::Display for Derivatives<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "}}")
    }
}
