//! Abstract Syntax Tree for normalized expressions

use crate::functions::{BinaryFn, UnaryFn};

/// Decimal text of π written into canonical output
pub(crate) const PI_LITERAL: &str = "3.14159265358979323846";
/// Decimal text of Euler's number written into canonical output
pub(crate) const E_LITERAL: &str = "2.71828182845904523536";

/// A parsed expression in one variable, `x`.
///
/// Number literals keep their decimal text, so a wider scalar type can
/// parse them at full precision when the tree is differentiated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Unsigned decimal literal (`digits[.digits]`)
    Number(String),

    /// The variable `x`
    Variable,

    /// Elementary function call
    Unary(UnaryFn, Box<Expr>),

    /// Arithmetic call
    Binary(BinaryFn, Box<Expr>, Box<Expr>),
}

impl Expr {
    // Convenience constructors

    /// Create a number expression from its literal text
    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(text.into())
    }

    /// Create the variable expression
    pub fn variable() -> Self {
        Expr::Variable
    }

    pub fn unary(f: UnaryFn, arg: Expr) -> Self {
        Expr::Unary(f, Box::new(arg))
    }

    pub fn binary(f: BinaryFn, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(f, Box::new(lhs), Box::new(rhs))
    }

    /// Unary minus, written as `sub(0, e)` in canonical form
    pub fn negate(e: Expr) -> Self {
        Expr::binary(BinaryFn::Sub, Expr::number("0"), e)
    }

    // Accessor methods

    /// Literal text if this is a number
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Expr::Number(text) => Some(text),
            _ => None,
        }
    }

    /// Whether `x` occurs anywhere in the tree
    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Variable => true,
            Expr::Unary(_, arg) => arg.contains_variable(),
            Expr::Binary(_, lhs, rhs) => lhs.contains_variable() || rhs.contains_variable(),
        }
    }

    /// Number of calls, which equals the number of parenthesis pairs in the
    /// canonical text
    pub fn call_count(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Variable => 0,
            Expr::Unary(_, arg) => 1 + arg.call_count(),
            Expr::Binary(_, lhs, rhs) => 1 + lhs.call_count() + rhs.call_count(),
        }
    }

    /// Nesting depth (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Variable => 1,
            Expr::Unary(_, arg) => 1 + arg.depth(),
            Expr::Binary(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}
