//! Token stream checks, in order: operator adjacency, names, decimal points
//!
//! All run on the raw token stream, before implicit multiplication is
//! inserted. Redundant unary `+` signs are dropped by the adjacency check.

use super::tokens::{Lexeme, Operator, Token};
use crate::error::NormalizeError;

/// A sign in this position has no left operand
fn is_prefix_position(prev: Option<&Token>) -> bool {
    matches!(
        prev,
        None | Some(Token::LeftParen | Token::Comma | Token::Operator(_) | Token::Radical)
    )
}

pub(crate) fn check_adjacency(tokens: Vec<Lexeme>) -> Result<Vec<Lexeme>, NormalizeError> {
    let mut out: Vec<Lexeme> = Vec::with_capacity(tokens.len());
    let mut it = tokens.into_iter().peekable();

    while let Some(lexeme) = it.next() {
        let prev = out.last().map(|l| &l.token);
        let next = it.peek();
        let span = Some(lexeme.span);

        match &lexeme.token {
            Token::Operator(op) => {
                match next.map(|l| &l.token) {
                    None => return Err(NormalizeError::TrailingOperator { span }),
                    Some(Token::RightParen | Token::Comma) => {
                        return Err(NormalizeError::OperatorBeforeParenthesis { span });
                    }
                    Some(Token::Operator(n)) if !n.is_sign() => {
                        return Err(NormalizeError::ConsecutiveOperators { span });
                    }
                    Some(Token::Superscript(_)) => {
                        return Err(NormalizeError::MisplacedExponent {
                            span: next.map(|l| l.span),
                        });
                    }
                    _ => {}
                }

                if !op.is_sign() {
                    match prev {
                        None => return Err(NormalizeError::HangingOperator { span }),
                        Some(Token::LeftParen | Token::Comma) => {
                            return Err(NormalizeError::OperatorAfterParenthesis { span });
                        }
                        Some(Token::Operator(_) | Token::Radical) => {
                            return Err(NormalizeError::ConsecutiveOperators { span });
                        }
                        _ => {}
                    }
                } else if *op == Operator::Add && is_prefix_position(prev) {
                    // Unary plus
                    continue;
                }
            }

            Token::Radical => match next.map(|l| &l.token) {
                None => return Err(NormalizeError::TrailingOperator { span }),
                Some(Token::RightParen | Token::Comma) => {
                    return Err(NormalizeError::OperatorBeforeParenthesis { span });
                }
                Some(Token::Operator(n)) if !n.is_sign() => {
                    return Err(NormalizeError::ConsecutiveOperators { span });
                }
                Some(Token::Superscript(_)) => {
                    return Err(NormalizeError::MisplacedExponent {
                        span: next.map(|l| l.span),
                    });
                }
                _ => {}
            },

            Token::Superscript(_) => {
                let follows_value = prev.is_some_and(|p| p.ends_value())
                    || matches!(prev, Some(Token::Function(_)));
                if !follows_value {
                    return Err(NormalizeError::MisplacedExponent { span });
                }
            }

            Token::Function(f) => {
                if !matches!(
                    next.map(|l| &l.token),
                    Some(Token::LeftParen | Token::Superscript(_))
                ) {
                    return Err(NormalizeError::MissingArgument {
                        name: f.name().to_string(),
                        span,
                    });
                }
            }

            Token::Number(_)
            | Token::Variable
            | Token::LeftParen
            | Token::RightParen
            | Token::Comma
            | Token::Unknown(_) => {}
        }

        out.push(lexeme);
    }

    Ok(out)
}

/// Reject letter runs that named nothing, and `x` where no variable is allowed
pub(crate) fn check_names(tokens: &[Lexeme], allow_variable: bool) -> Result<(), NormalizeError> {
    for lexeme in tokens {
        let span = Some(lexeme.span);
        match &lexeme.token {
            Token::Unknown(name) => {
                return Err(NormalizeError::UnknownName {
                    name: name.clone(),
                    span,
                });
            }
            Token::Variable if !allow_variable => {
                return Err(NormalizeError::VariableNotAllowed { span });
            }
            _ => {}
        }
    }
    Ok(())
}

/// A literal may hold one point, with a digit on both sides
pub(crate) fn check_decimals(tokens: &[Lexeme]) -> Result<(), NormalizeError> {
    for lexeme in tokens {
        if let Token::Number(literal) = &lexeme.token {
            let span = Some(lexeme.span);
            match literal.matches('.').count() {
                0 => {}
                1 if !literal.starts_with('.') && !literal.ends_with('.') => {}
                1 => return Err(NormalizeError::IncorrectDecimal { span }),
                _ => return Err(NormalizeError::MultipleDecimals { span }),
            }
        }
    }
    Ok(())
}
