//! Derivative vectors of parsed expressions
//!
//! The walk lives on [`Expr`](crate::Expr); configuration and safety limits
//! are applied by [`Differentiator`](crate::Differentiator) before it starts.

mod engine;
