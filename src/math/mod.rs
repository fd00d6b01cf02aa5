//! Closed-form derivative recurrences
//!
//! Each elementary operation maps the derivative vectors of its operands to
//! the derivative vector of the result. Every entry is produced by a fixed
//! finite sum over lower entries and binomial coefficients; no numerical
//! differentiation is involved.
//!
//! The dispatch entry points take tagged [`Derivatives`], so a variable-free
//! operand is recognized by its tag and takes the scaling fast paths.

mod arith;
mod binomial;
mod compose;
mod derivatives;
mod elementary;
mod hyperbolic;
mod inverse;
mod trig;

pub use binomial::BinomialTable;
pub use derivatives::Derivatives;

use crate::error::DiffError;
use crate::functions::{BinaryFn, UnaryFn};
use crate::traits::{DEFAULT_SINGULARITY_TOLERANCE, MathScalar};

/// Order from which `asin`, `atan` and `tanh` (and the functions built on
/// them) switch from the Faà di Bruno expansion to the reduced-order quotient
pub const DEFAULT_CROSSOVER: usize = 27;

/// Entry `i` of a derivative slice, zero past its end
#[inline]
pub(crate) fn at<T: MathScalar>(u: &[T], i: usize) -> T {
    u.get(i).copied().unwrap_or_else(T::zero)
}

/// Derivative vector of `u'`: entries `1 ..= order` of `u`, shifted down
#[inline]
pub(crate) fn shifted<T: MathScalar>(u: &[T], order: usize) -> Vec<T> {
    (1..=order).map(|i| at(u, i)).collect()
}

/// State shared by the recurrences of one engine: the binomial cache and
/// the numeric knobs.
#[derive(Debug, Clone)]
pub struct TaylorContext<T: MathScalar> {
    pub(crate) binomials: BinomialTable<T>,
    crossover: usize,
    tolerance: T,
}

impl<T: MathScalar> Default for TaylorContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MathScalar> TaylorContext<T> {
    pub fn new() -> Self {
        Self {
            binomials: BinomialTable::new(),
            crossover: DEFAULT_CROSSOVER,
            tolerance: T::from_f64(DEFAULT_SINGULARITY_TOLERANCE).unwrap_or_else(T::epsilon),
        }
    }

    pub fn crossover(&self) -> usize {
        self.crossover
    }

    pub fn set_crossover(&mut self, crossover: usize) {
        self.crossover = crossover;
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    pub fn set_tolerance(&mut self, tolerance: T) {
        self.tolerance = tolerance.abs();
    }

    /// Derivatives of `f(u)` through `order`
    pub fn unary(
        &mut self,
        f: UnaryFn,
        u: &Derivatives<T>,
        order: usize,
    ) -> Result<Vec<T>, DiffError> {
        let u = u.as_slice();
        match f {
            UnaryFn::Exp => Ok(self.exp(u, order)),
            UnaryFn::Ln => self.ln(u, order),
            UnaryFn::Sqrt => self.sqrt(u, order),
            UnaryFn::Sin => Ok(self.sin(u, order)),
            UnaryFn::Cos => Ok(self.cos(u, order)),
            UnaryFn::Tan => self.tan(u, order),
            UnaryFn::Csc => self.csc(u, order),
            UnaryFn::Sec => self.sec(u, order),
            UnaryFn::Cot => self.cot(u, order),
            UnaryFn::Asin => self.asin(u, order),
            UnaryFn::Acos => self.acos(u, order),
            UnaryFn::Atan => self.atan(u, order),
            UnaryFn::Acsc => self.acsc(u, order),
            UnaryFn::Asec => self.asec(u, order),
            UnaryFn::Acot => self.acot(u, order),
            UnaryFn::Sinh => Ok(self.sinh(u, order)),
            UnaryFn::Cosh => Ok(self.cosh(u, order)),
            UnaryFn::Tanh => self.tanh(u, order),
            UnaryFn::Csch => self.csch(u, order),
            UnaryFn::Sech => self.sech(u, order),
            UnaryFn::Coth => self.coth(u, order),
        }
    }

    /// Derivatives of `f(u, v)` through `order`
    pub fn binary(
        &mut self,
        f: BinaryFn,
        u: &Derivatives<T>,
        v: &Derivatives<T>,
        order: usize,
    ) -> Result<Vec<T>, DiffError> {
        use Derivatives::{Constant, Series};

        match (f, u, v) {
            (BinaryFn::Add, _, _) => Ok(Self::add(u.as_slice(), v.as_slice(), order)),
            (BinaryFn::Sub, _, _) => Ok(Self::sub(u.as_slice(), v.as_slice(), order)),

            (BinaryFn::Mul, Constant(c), _) => Ok(Self::scale(v.as_slice(), *c, order)),
            (BinaryFn::Mul, _, Constant(c)) => Ok(Self::scale(u.as_slice(), *c, order)),
            (BinaryFn::Mul, Series(u), Series(v)) => Ok(self.mul(u, v, order)),

            (BinaryFn::Div, _, Constant(c)) => Self::div_constant(u.as_slice(), *c, order),
            (BinaryFn::Div, _, Series(v)) => self.div(u.as_slice(), v, order),

            (BinaryFn::Pow, _, _) => self.pow(u, v, order),
        }
    }
}
