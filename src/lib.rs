//! Expression normalizer and Taylor-coefficient differentiation engine
//!
//! Two stages:
//! - **Normalization** turns free-form input (`2x²+√(x+1)`, `arctan 3x`-style
//!   aliases, unicode operators, implicit multiplication) into a canonical
//!   prefix form such as `add(mul(2,pow(x,2)),sqrt(add(x,1)))`, or rejects it
//!   with one fixed diagnostic.
//! - **Differentiation** computes the derivatives `f(0) ..= f(n)` of a
//!   canonical expression at a point with exact recurrences, never with
//!   finite differences.
//!
//! # Usage Examples
//!
//! ## String-based API
//! ```
//! use symb_taylor::{derivatives, normalize};
//!
//! let canonical = normalize("x^2-1").unwrap();
//! assert_eq!(canonical, "sub(pow(x,2),1)");
//!
//! let d = derivatives(&canonical, 3, 2.0).unwrap();
//! assert_eq!(d, vec![3.0, 4.0, 2.0, 0.0]);
//! ```
//!
//! ## Builder API
//! ```
//! use symb_taylor::{Differentiator, Normalizer};
//!
//! let expr = Normalizer::new().parse("sin(x)").unwrap();
//! let d = Differentiator::<f64>::new()
//!     .max_depth(50)
//!     .derivatives(&expr, 4, 0.0)
//!     .unwrap();
//! assert_eq!(d.len(), 5);
//! ```

mod ast;
mod builder;
mod diff;
mod display;
mod error;
pub mod functions;
mod math;
mod parser;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::Expr;
pub use builder::{Differentiator, Normalizer};
pub use error::{DiffError, NormalizeError, Span};
pub use functions::{BinaryFn, Function, UnaryFn};
pub use math::{BinomialTable, DEFAULT_CROSSOVER, Derivatives, TaylorContext};
pub use parser::{normalize_with, parse};
pub use traits::{DEFAULT_SINGULARITY_TOLERANCE, MathScalar};

/// Default maximum expression nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// Suggested `order × call count` threshold for the opt-in complexity guard
pub const DEFAULT_COMPLEXITY_LIMIT: usize = 10_000;
/// Highest derivative order accepted
pub const MAX_ORDER: usize = 1000;

/// Normalize free-form input to canonical text, admitting the variable `x`
///
/// # Example
/// ```
/// use symb_taylor::normalize;
///
/// assert_eq!(normalize("2x+3").unwrap(), "add(mul(2,x),3)");
/// assert_eq!(normalize("").unwrap_err().to_string(), "EMPTY STRING.");
/// ```
pub fn normalize(input: &str) -> Result<String, NormalizeError> {
    normalize_with(input, true)
}

/// Derivatives of canonical text at `point` with default settings
///
/// # Arguments
/// * `canonical` - Canonical expression (e.g., `"mul(x,x)"`)
/// * `order` - Highest derivative order, at most [`MAX_ORDER`]
/// * `point` - Value of `x`
///
/// # Returns
/// `order + 1` derivative values, or a single value when the expression
/// does not depend on `x`
///
/// # Example
/// ```
/// use symb_taylor::derivatives;
///
/// assert_eq!(derivatives("mul(x,x)", 2, 3.0).unwrap(), vec![9.0, 6.0, 2.0]);
/// assert_eq!(derivatives("add(2,3)", 4, 0.0).unwrap(), vec![5.0]);
/// assert!(derivatives("div(1,x)", 0, 0.0).is_err());
/// ```
///
/// # Note
/// For more control (crossover, tolerance, limits), use the [`Differentiator`] builder.
pub fn derivatives(canonical: &str, order: usize, point: f64) -> Result<Vec<f64>, DiffError> {
    Differentiator::new()
        .derivatives_str(canonical, order, point)
        .map(Derivatives::into_vec)
}

/// Normalize free-form input, then compute its derivatives at `point`
///
/// Normalizer failures come back as [`DiffError::Normalize`].
///
/// # Example
/// ```
/// use symb_taylor::{DiffError, NormalizeError, differentiate};
///
/// assert_eq!(differentiate("x²", 2, 3.0).unwrap(), vec![9.0, 6.0, 2.0]);
/// assert!(matches!(
///     differentiate("x+", 1, 0.0),
///     Err(DiffError::Normalize(NormalizeError::TrailingOperator { .. }))
/// ));
/// ```
pub fn differentiate(formula: &str, order: usize, point: f64) -> Result<Vec<f64>, DiffError> {
    let canonical = normalize(formula)?;
    derivatives(&canonical, order, point)
}
