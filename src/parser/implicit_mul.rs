//! Implicit multiplication insertion for natural notation
//!
//! Inserts `*` operators between tokens where multiplication is implied, e.g. `2x` → `2 * x`.

use super::tokens::{Lexeme, Operator, Token};
use crate::error::Span;

/// Check if implicit multiplication should be inserted between two tokens
fn should_insert_mul(prev: Option<&Token>, current: &Token, next: &Token) -> bool {
    match (current, next) {
        // Function power: sin²(x) is a call, not sin² * (x)
        (Token::Superscript(_), _) if matches!(prev, Some(Token::Function(_))) => false,

        // Coalesced arms for standard multiplication cases:
        // Number * Variable: 2x
        // Number * Number: 2π
        // Number * (: 2(x)
        // Variable * Function: x sin(x)
        // ) * Radical: (a)√x
        // Superscript * anything that starts a value: x²3, x²(x+1)
        (c, n) => c.ends_value() && n.starts_value(),
    }
}

/// Insert implicit multiplication operators between appropriate tokens
///
/// Rules:
/// - Number/Variable/`)`/superscript followed by
///   Number/Variable/`(`/function/`√`: insert `*`
///
/// Exception: a superscript directly after a function name is a power of
/// the call that follows, so nothing is inserted after it
pub(crate) fn insert_implicit_multiplication(tokens: Vec<Lexeme>) -> Vec<Lexeme> {
    if tokens.is_empty() {
        return tokens;
    }

    // Optimization: Check if any insertion is needed before allocating new vector
    let needs_insertion = tokens.windows(2).enumerate().any(|(i, w)| {
        let prev = i.checked_sub(1).map(|j| &tokens[j].token);
        should_insert_mul(prev, &w[0].token, &w[1].token)
    });

    if !needs_insertion {
        return tokens;
    }

    let mut result: Vec<Lexeme> = Vec::with_capacity(tokens.len() * 3 / 2);
    let mut it = tokens.into_iter().peekable();

    while let Some(current) = it.next() {
        let boundary = it.peek().and_then(|next| {
            let prev = result.last().map(|l| &l.token);
            should_insert_mul(prev, &current.token, &next.token).then_some(next.span.start)
        });

        result.push(current);
        if let Some(pos) = boundary {
            result.push(Lexeme::new(
                Token::Operator(Operator::Mul),
                Span::new(pos, pos),
            ));
        }
    }

    result
}
