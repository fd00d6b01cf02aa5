//! Tokenizer over prepared text
//!
//! Unicode operators, constants and superscript runs are resolved here, so
//! later stages only ever see ASCII-equivalent tokens. Nothing is rejected
//! on its name or its decimal points yet; see `validate`.

use super::prepare::superscript_digit;
use super::tokens::{Lexeme, Operator, Token};
use crate::ast::{E_LITERAL, PI_LITERAL};
use crate::error::{NormalizeError, Span};
use crate::functions::Function;
use std::iter::Peekable;
use std::str::CharIndices;

/// Split prepared text into tokens.
///
/// Each maximal letter run is split greedily, longest name first, into
/// `x`, the constant `e` and known function names. A run that does not
/// split completely becomes a single `Token::Unknown`.
pub(crate) fn lex(text: &str) -> Result<Vec<Lexeme>, NormalizeError> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        let token = if c.is_ascii_digit() || c == '.' {
            Token::Number(take_while(&mut chars, |c| c.is_ascii_digit() || c == '.'))
        } else if c.is_ascii_lowercase() {
            let run = take_while(&mut chars, |c| c.is_ascii_lowercase());
            split_letters(&run, start, &mut tokens);
            continue;
        } else if superscript_digit(c).is_some() {
            let run = take_while(&mut chars, |c| superscript_digit(c).is_some());
            Token::Superscript(run.chars().filter_map(superscript_digit).collect())
        } else {
            chars.next();
            match c {
                '+' => Token::Operator(Operator::Add),
                '-' => Token::Operator(Operator::Sub),
                '*' | '×' | '·' => Token::Operator(Operator::Mul),
                '/' | '÷' => Token::Operator(Operator::Div),
                '^' => Token::Operator(Operator::Pow),
                '√' => Token::Radical,
                'π' => Token::Number(PI_LITERAL.to_string()),
                '(' => Token::LeftParen,
                ')' => Token::RightParen,
                ',' => Token::Comma,
                found => {
                    return Err(NormalizeError::InvalidCharacters {
                        found,
                        span: Some(Span::new(start, start + found.len_utf8())),
                    });
                }
            }
        };

        let end = chars.peek().map_or(text.len(), |&(pos, _)| pos);
        tokens.push(Lexeme::new(token, Span::new(start, end)));
    }

    Ok(tokens)
}

fn take_while(chars: &mut Peekable<CharIndices<'_>>, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !pred(c) {
            break;
        }
        out.push(c);
        chars.next();
    }
    out
}

/// Name starting the (ASCII) run, longest first
fn leading_name(run: &str) -> Option<(Token, usize)> {
    let longest = run.len().min(Function::MAX_NAME_LEN);
    (1..=longest).rev().find_map(|len| {
        let word = &run[..len];
        match word {
            "x" => Some(Token::Variable),
            "e" => Some(Token::Number(E_LITERAL.to_string())),
            _ => Function::from_name(word).map(Token::Function),
        }
        .map(|token| (token, len))
    })
}

fn split_letters(run: &str, start: usize, tokens: &mut Vec<Lexeme>) {
    let mut pieces = Vec::new();
    let mut offset = 0;
    while offset < run.len() {
        match leading_name(&run[offset..]) {
            Some((token, len)) => {
                let at = start + offset;
                pieces.push(Lexeme::new(token, Span::new(at, at + len)));
                offset += len;
            }
            None => {
                tokens.push(Lexeme::new(
                    Token::Unknown(run.to_string()),
                    Span::new(start, start + run.len()),
                ));
                return;
            }
        }
    }
    tokens.extend(pieces);
}
