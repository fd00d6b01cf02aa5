//! Function names understood by the normalizer and the differentiation engine
//!
//! Every canonical call is either a unary elementary function or one of the
//! five binary arithmetic calls. Dispatch over these enums is an exhaustive
//! `match`, so adding a function is a compile error until every stage handles it.

use std::fmt;

pub(crate) mod registry;

/// Elementary functions of one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFn {
    Exp,
    Ln,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    Asin,
    Acos,
    Atan,
    Acsc,
    Asec,
    Acot,
    Sinh,
    Cosh,
    Tanh,
    Csch,
    Sech,
    Coth,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 21] = [
        UnaryFn::Exp,
        UnaryFn::Ln,
        UnaryFn::Sqrt,
        UnaryFn::Sin,
        UnaryFn::Cos,
        UnaryFn::Tan,
        UnaryFn::Csc,
        UnaryFn::Sec,
        UnaryFn::Cot,
        UnaryFn::Asin,
        UnaryFn::Acos,
        UnaryFn::Atan,
        UnaryFn::Acsc,
        UnaryFn::Asec,
        UnaryFn::Acot,
        UnaryFn::Sinh,
        UnaryFn::Cosh,
        UnaryFn::Tanh,
        UnaryFn::Csch,
        UnaryFn::Sech,
        UnaryFn::Coth,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Exp => "exp",
            UnaryFn::Ln => "ln",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Csc => "csc",
            UnaryFn::Sec => "sec",
            UnaryFn::Cot => "cot",
            UnaryFn::Asin => "asin",
            UnaryFn::Acos => "acos",
            UnaryFn::Atan => "atan",
            UnaryFn::Acsc => "acsc",
            UnaryFn::Asec => "asec",
            UnaryFn::Acot => "acot",
            UnaryFn::Sinh => "sinh",
            UnaryFn::Cosh => "cosh",
            UnaryFn::Tanh => "tanh",
            UnaryFn::Csch => "csch",
            UnaryFn::Sech => "sech",
            UnaryFn::Coth => "coth",
        }
    }
}

/// Arithmetic calls of two arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryFn {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryFn {
    pub const ALL: [BinaryFn; 5] = [
        BinaryFn::Add,
        BinaryFn::Sub,
        BinaryFn::Mul,
        BinaryFn::Div,
        BinaryFn::Pow,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            BinaryFn::Add => "add",
            BinaryFn::Sub => "sub",
            BinaryFn::Mul => "mul",
            BinaryFn::Div => "div",
            BinaryFn::Pow => "pow",
        }
    }
}

/// Any callable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Unary(UnaryFn),
    Binary(BinaryFn),
}

impl Function {
    /// Length of the longest canonical name
    pub(crate) const MAX_NAME_LEN: usize = 4;

    /// Look a canonical name up - O(1) map lookup
    pub fn from_name(name: &str) -> Option<Function> {
        registry::Registry::get(name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Unary(f) => f.name(),
            Function::Binary(f) => f.name(),
        }
    }

    /// Number of arguments the call takes
    pub fn arity(self) -> usize {
        match self {
            Function::Unary(_) => 1,
            Function::Binary(_) => 2,
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
