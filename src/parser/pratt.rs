use super::tokens::{Lexeme, MUL_PRECEDENCE, Operator, POW_PRECEDENCE, Token};
use crate::Expr;
use crate::error::{NormalizeError, Span};
use crate::functions::{BinaryFn, Function, UnaryFn};

/// Deepest bracket nesting or tree height the parser accepts
pub(crate) const MAX_NESTING_DEPTH: usize = 256;

/// A subtree and its height (a leaf has height 1)
type Parsed = (Expr, usize);

/// Parse tokens into an AST using Pratt parsing algorithm
pub(crate) fn parse_expression(tokens: &[Lexeme]) -> Result<Expr, NormalizeError> {
    if tokens.is_empty() {
        return Err(NormalizeError::EmptyString);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let (expr, _) = parser.parse_expr(0)?;

    match parser.peek() {
        None => Ok(expr),
        Some(Lexeme {
            token: Token::Comma,
            span,
        }) => Err(NormalizeError::MisplacedComma { span: Some(*span) }),
        Some(lexeme) => Err(NormalizeError::IncorrectParenthesis {
            span: Some(lexeme.span),
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Lexeme],
    pos: usize,
    /// Current `parse_expr` recursion depth
    depth: usize,
}

impl<'a> Parser<'a> {
    // Borrows from the underlying slice 'a, not from self, so a token can be
    // held while advancing
    fn peek(&self) -> Option<&'a Lexeme> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn too_deep(&self) -> NormalizeError {
        NormalizeError::TooDeeplyNested {
            span: self.peek().map(|l| l.span),
        }
    }

    /// Height of a node over children of height `below`
    fn node_height(&self, below: usize) -> Result<usize, NormalizeError> {
        let height = below + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(self.too_deep());
        }
        Ok(height)
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Parsed, NormalizeError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.too_deep());
        }
        self.depth += 1;
        let parsed = self.parse_infix(min_precedence);
        self.depth -= 1;
        parsed
    }

    fn parse_infix(&mut self, min_precedence: u8) -> Result<Parsed, NormalizeError> {
        // Parse left side (prefix)
        let (mut left, mut height) = self.parse_prefix(min_precedence)?;

        // Parse operators and right side (infix)
        while let Some(lexeme) = self.peek() {
            match &lexeme.token {
                Token::Operator(op) => {
                    let precedence = op.precedence();
                    if precedence < min_precedence {
                        break;
                    }
                    self.advance();

                    // Right associative for power, left for others
                    let next_precedence = if *op == Operator::Pow {
                        precedence
                    } else {
                        precedence + 1
                    };

                    let (right, right_height) = self.parse_expr(next_precedence)?;
                    height = self.node_height(height.max(right_height))?;
                    left = Expr::binary(op.to_binary(), left, right);
                }

                // x² binds like ^2
                Token::Superscript(digits) => {
                    if POW_PRECEDENCE < min_precedence {
                        break;
                    }
                    self.advance();
                    height = self.node_height(height)?;
                    left = Expr::binary(BinaryFn::Pow, left, Expr::number(digits.clone()));
                }

                _ => break,
            }
        }

        Ok((left, height))
    }

    fn parse_prefix(&mut self, min_precedence: u8) -> Result<Parsed, NormalizeError> {
        let lexeme = self
            .peek()
            .ok_or(NormalizeError::TrailingOperator { span: None })?;
        let span = Some(lexeme.span);

        match &lexeme.token {
            Token::Number(text) => {
                self.advance();
                Ok((Expr::number(text.clone()), 1))
            }

            Token::Variable => {
                self.advance();
                Ok((Expr::variable(), 1))
            }

            Token::Function(f) => {
                self.advance();
                self.parse_call(*f, lexeme.span)
            }

            // √ takes everything up to the next + - * / , or closing paren,
            // which is exactly an operand at power precedence
            Token::Radical => {
                self.advance();
                let (operand, height) = self.parse_expr(POW_PRECEDENCE)?;
                Ok((Expr::unary(UnaryFn::Sqrt, operand), self.node_height(height)?))
            }

            // Unary minus: a leading sign covers the following product,
            // one after an operator only what that operator would bind
            Token::Operator(Operator::Sub) => {
                self.advance();
                let (operand, height) = self.parse_expr(min_precedence.max(MUL_PRECEDENCE))?;
                Ok((Expr::negate(operand), self.node_height(height)?))
            }

            Token::Operator(Operator::Add) => {
                while let Some(Lexeme {
                    token: Token::Operator(Operator::Add),
                    ..
                }) = self.peek()
                {
                    self.advance();
                }
                self.parse_prefix(min_precedence)
            }

            Token::Operator(_) => Err(NormalizeError::HangingOperator { span }),

            Token::LeftParen => {
                self.advance(); // consume (
                let parsed = self.parse_expr(0)?;
                self.expect_close(lexeme.span)?;
                Ok(parsed)
            }

            Token::RightParen | Token::Comma => Err(NormalizeError::MissingOperand { span }),

            Token::Superscript(_) => Err(NormalizeError::MisplacedExponent { span }),

            Token::Unknown(name) => Err(NormalizeError::UnknownName {
                name: name.clone(),
                span,
            }),
        }
    }

    /// Parse `name(args)` or `name²(args)` after the name was consumed
    fn parse_call(&mut self, f: Function, name_span: Span) -> Result<Parsed, NormalizeError> {
        let power = match self.peek() {
            Some(Lexeme {
                token: Token::Superscript(digits),
                ..
            }) => {
                self.advance();
                Some(digits.clone())
            }
            _ => None,
        };

        match self.peek() {
            Some(Lexeme {
                token: Token::LeftParen,
                span,
            }) => {
                self.advance();
                let open = *span;
                let mut args = vec![self.parse_expr(0)?];
                while let Some(Lexeme {
                    token: Token::Comma,
                    ..
                }) = self.peek()
                {
                    self.advance(); // consume ,
                    args.push(self.parse_expr(0)?);
                }
                self.expect_close(open)?;

                let got = args.len();
                let below = args.iter().map(|(_, h)| *h).max().unwrap_or(0);
                let mut args = args.into_iter().map(|(arg, _)| arg);
                let call = match (f, args.next(), args.next()) {
                    (Function::Unary(u), Some(arg), None) => Expr::unary(u, arg),
                    (Function::Binary(b), Some(lhs), Some(rhs)) if got == 2 => {
                        Expr::binary(b, lhs, rhs)
                    }
                    _ => {
                        return Err(NormalizeError::WrongArgumentCount {
                            name: f.name().to_string(),
                            expected: f.arity(),
                            got,
                        });
                    }
                };
                let height = self.node_height(below)?;

                Ok(match power {
                    Some(digits) => (
                        Expr::binary(BinaryFn::Pow, call, Expr::number(digits)),
                        self.node_height(height)?,
                    ),
                    None => (call, height),
                })
            }
            _ => Err(NormalizeError::MissingArgument {
                name: f.name().to_string(),
                span: Some(name_span),
            }),
        }
    }

    fn expect_close(&mut self, open: Span) -> Result<(), NormalizeError> {
        match self.peek() {
            Some(Lexeme {
                token: Token::RightParen,
                ..
            }) => {
                self.advance(); // consume )
                Ok(())
            }
            Some(Lexeme {
                token: Token::Comma,
                span,
            }) => Err(NormalizeError::MisplacedComma { span: Some(*span) }),
            Some(lexeme) => Err(NormalizeError::IncorrectParenthesis {
                span: Some(lexeme.span),
            }),
            None => Err(NormalizeError::IncorrectParenthesis { span: Some(open) }),
        }
    }
}
