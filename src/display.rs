// Canonical text for the AST
use crate::Expr;
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(text) => f.write_str(text),

            Expr::Variable => f.write_str("x"),

            Expr::Unary(func, arg) => write!(f, "{}({})", func, arg),

            // The argument comma always sits at depth 0 inside the call
            Expr::Binary(func, lhs, rhs) => write!(f, "{}({},{})", func, lhs, rhs),
        }
    }
}
