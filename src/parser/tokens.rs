use crate::error::Span;
use crate::functions::{BinaryFn, Function};

/// Infix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

// Each operator is its own level, in the rewrite order `^ / * - +`:
// `x+1-2` is `add(x,sub(1,2))` and `2*x/3` is `mul(2,div(x,3))`

/// Binding power of `+`
pub(crate) const ADD_PRECEDENCE: u8 = 10;
/// Binding power of `-`
pub(crate) const SUB_PRECEDENCE: u8 = 12;
/// Binding power of `*`, and of the operand of a leading `-`
pub(crate) const MUL_PRECEDENCE: u8 = 20;
/// Binding power of `/`
pub(crate) const DIV_PRECEDENCE: u8 = 22;
/// Binding power of `^` and superscript exponents
pub(crate) const POW_PRECEDENCE: u8 = 30;

impl Operator {
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Operator::Add => ADD_PRECEDENCE,
            Operator::Sub => SUB_PRECEDENCE,
            Operator::Mul => MUL_PRECEDENCE,
            Operator::Div => DIV_PRECEDENCE,
            Operator::Pow => POW_PRECEDENCE,
        }
    }

    /// Canonical call the operator rewrites to
    pub(crate) fn to_binary(self) -> BinaryFn {
        match self {
            Operator::Add => BinaryFn::Add,
            Operator::Sub => BinaryFn::Sub,
            Operator::Mul => BinaryFn::Mul,
            Operator::Div => BinaryFn::Div,
            Operator::Pow => BinaryFn::Pow,
        }
    }

    /// `+` and `-` may also appear as prefix signs
    pub(crate) fn is_sign(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// Decimal literal text, including substituted constants
    Number(String),
    Variable,
    Function(Function),
    /// `√`, a prefix square root
    Radical,
    Operator(Operator),
    /// Digits of a superscript exponent run, already converted to ASCII
    Superscript(String),
    LeftParen,
    RightParen,
    Comma,
    /// A letter run that does not split into known names
    Unknown(String),
}

impl Token {
    /// Tokens that end an operand
    pub(crate) fn ends_value(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::Variable
                | Token::RightParen
                | Token::Superscript(_)
                | Token::Unknown(_)
        )
    }

    /// Tokens that can begin an operand
    pub(crate) fn starts_value(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::Variable
                | Token::Function(_)
                | Token::Radical
                | Token::LeftParen
                | Token::Unknown(_)
        )
    }
}

/// A token with its location in the prepared text
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lexeme {
    pub token: Token,
    pub span: Span,
}

impl Lexeme {
    pub(crate) fn new(token: Token, span: Span) -> Self {
        Lexeme { token, span }
    }
}
