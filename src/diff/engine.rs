//! Tree walk: derivative vectors bottom-up
//!
//! Each call node asks its operands for their vectors and combines them
//! with the recurrence of its function. A subtree without `x` is evaluated
//! once at order 0 and handed up as a constant, which keeps every product
//! and quotient above it on the scaling fast path.

use crate::error::DiffError;
use crate::math::{Derivatives, TaylorContext};
use crate::traits::MathScalar;
use crate::Expr;

/// Parse a canonical number literal into the working scalar
pub(crate) fn parse_literal<T: MathScalar>(text: &str) -> Result<T, DiffError> {
    T::from_str_radix(text, 10).map_err(|_| DiffError::InvalidNumber(text.to_string()))
}

impl Expr {
    /// Derivatives of this expression with respect to `x` at `point`,
    /// orders `0 ..= order`
    pub(crate) fn taylor<T: MathScalar>(
        &self,
        ctx: &mut TaylorContext<T>,
        order: usize,
        point: T,
    ) -> Result<Derivatives<T>, DiffError> {
        match self {
            Expr::Number(text) => parse_literal(text).map(Derivatives::Constant),

            Expr::Variable => Ok(Derivatives::Series(if order == 0 {
                vec![point]
            } else {
                vec![point, T::one()]
            })),

            _ if !self.contains_variable() => {
                let value = self.expand(ctx, 0, point)?;
                Ok(Derivatives::Constant(value[0]))
            }

            _ => self.expand(ctx, order, point).map(Derivatives::Series),
        }
    }

    /// Apply this node's recurrence to its operands' vectors
    fn expand<T: MathScalar>(
        &self,
        ctx: &mut TaylorContext<T>,
        order: usize,
        point: T,
    ) -> Result<Vec<T>, DiffError> {
        match self {
            Expr::Unary(f, arg) => {
                let u = arg.taylor(ctx, order, point)?;
                log::trace!("{} at order {}", f, order);
                ctx.unary(*f, &u, order)
            }

            Expr::Binary(f, lhs, rhs) => {
                let u = lhs.taylor(ctx, order, point)?;
                let v = rhs.taylor(ctx, order, point)?;
                log::trace!("{} at order {}", f, order);
                ctx.binary(*f, &u, &v, order)
            }

            Expr::Number(_) | Expr::Variable => Ok(self.taylor(ctx, order, point)?.padded(order)),
        }
    }
}
