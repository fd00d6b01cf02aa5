//! Builder pattern API for normalization and differentiation
//!
//! Provides a fluent interface for configuring both stages.
//!
//! # Example
//! ```
//! use symb_taylor::{Differentiator, Normalizer};
//!
//! let expr = Normalizer::new().parse("x^2 + sin(x)").unwrap();
//!
//! let derivatives = Differentiator::<f64>::new()
//!     .crossover(10)
//!     .derivatives(&expr, 2, 0.0)
//!     .unwrap();
//! assert_eq!(derivatives.as_slice(), &[0.0, 1.0, 2.0]);
//! ```

use crate::math::TaylorContext;
use crate::{
    DEFAULT_MAX_DEPTH, Derivatives, DiffError, Expr, MAX_ORDER, MathScalar, NormalizeError, parser,
};

/// Builder for normalization
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    allow_variable: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            allow_variable: true,
        }
    }
}

impl Normalizer {
    /// Create a normalizer that admits the variable `x`
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `x` may appear; unset for inputs that must be constant
    pub fn allow_variable(mut self, allow: bool) -> Self {
        self.allow_variable = allow;
        self
    }

    /// Normalize free-form input to canonical text
    pub fn normalize(&self, input: &str) -> Result<String, NormalizeError> {
        parser::normalize_with(input, self.allow_variable)
    }

    /// Normalize free-form input to an expression tree
    pub fn parse(&self, input: &str) -> Result<Expr, NormalizeError> {
        parser::parse(input, self.allow_variable)
    }
}

/// Builder for derivative vectors
///
/// Owns the binomial cache, so reusing one instance across calls avoids
/// rebuilding Pascal's triangle. Methods take `&mut self` for that reason.
#[derive(Debug, Clone)]
pub struct Differentiator<T: MathScalar = f64> {
    context: TaylorContext<T>,
    max_depth: Option<usize>,
    complexity_limit: Option<usize>,
}

impl<T: MathScalar> Default for Differentiator<T> {
    fn default() -> Self {
        Self {
            context: TaylorContext::new(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            complexity_limit: None,
        }
    }
}

impl<T: MathScalar> Differentiator<T> {
    /// Create a differentiator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Order from which `asin`, `atan` and `tanh` (and the functions built
    /// on them) use the reduced-order quotient instead of expanding directly
    pub fn crossover(mut self, crossover: usize) -> Self {
        self.context.set_crossover(crossover);
        self
    }

    /// Distance from a pole under which tan, cot, sec and csc fail
    pub fn singularity_tolerance(mut self, tolerance: T) -> Self {
        self.context.set_tolerance(tolerance);
        self
    }

    /// Set maximum expression nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Reject requests where `order × call count` exceeds `limit`
    ///
    /// Off unless set; [`DEFAULT_COMPLEXITY_LIMIT`](crate::DEFAULT_COMPLEXITY_LIMIT)
    /// is a reasonable threshold.
    pub fn complexity_limit(mut self, limit: usize) -> Self {
        self.complexity_limit = Some(limit);
        self
    }

    /// Derivatives of `expr` with respect to `x` at `point`, orders
    /// `0 ..= order`.
    ///
    /// The result holds exactly `order + 1` entries, or a single value for an
    /// expression without `x`.
    ///
    /// # Errors
    /// Guard errors ([`DiffError::OrderTooLarge`], [`DiffError::MaxDepthExceeded`],
    /// [`DiffError::ComplexityLimit`]) are raised before any work is done.
    /// Domain errors abort the whole computation.
    pub fn derivatives(
        &mut self,
        expr: &Expr,
        order: usize,
        point: T,
    ) -> Result<Derivatives<T>, DiffError> {
        self.check_limits(expr, order)?;

        log::debug!("derivatives of {} to order {} at {}", expr, order, point);
        match expr.taylor(&mut self.context, order, point) {
            Ok(Derivatives::Series(mut values)) => {
                // Leaves stop at their last nonzero entry
                values.resize(order + 1, T::zero());
                Ok(Derivatives::Series(values))
            }
            Ok(constant) => Ok(constant),
            Err(err) => {
                log::debug!("derivatives of {} failed: {}", expr, err);
                Err(err)
            }
        }
    }

    /// Parse canonical (or free-form) text and compute its derivatives
    pub fn derivatives_str(
        &mut self,
        formula: &str,
        order: usize,
        point: T,
    ) -> Result<Derivatives<T>, DiffError> {
        let expr = parser::parse(formula, true)?;
        self.derivatives(&expr, order, point)
    }

    fn check_limits(&self, expr: &Expr, order: usize) -> Result<(), DiffError> {
        if order > MAX_ORDER {
            return Err(DiffError::OrderTooLarge {
                order,
                max: MAX_ORDER,
            });
        }

        if let Some(max_d) = self.max_depth
            && expr.depth() > max_d
        {
            return Err(DiffError::MaxDepthExceeded);
        }

        if let Some(limit) = self.complexity_limit {
            let calls = expr.call_count();
            if order.saturating_mul(calls) > limit {
                return Err(DiffError::ComplexityLimit {
                    order,
                    calls,
                    limit,
                });
            }
        }

        Ok(())
    }
}
