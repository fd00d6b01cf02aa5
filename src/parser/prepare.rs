//! Character-level rewriting that runs before tokenization
//!
//! Lowercases, strips whitespace, rejects foreign characters, expands
//! function-name aliases, collapses sign runs, repairs bare decimal points
//! and balances parentheses.

use crate::error::{NormalizeError, Span};

/// Ordered alias rewrites. Entries that contain a later key must come first:
/// `cotangent` before `tangent`, `ctg` before `tg`, every `tg`/`sine` form
/// before `arc`, and `sine` before `cosin`.
const ALIASES: &[(&str, &str)] = &[
    ("cosecant", "csc"),
    ("cosec", "csc"),
    ("cotangent", "cot"),
    ("cotan", "cot"),
    ("ctg", "cot"),
    ("tangent", "tan"),
    ("tg", "tan"),
    ("secant", "sec"),
    ("sine", "sin"),
    ("cosin", "cos"),
    ("arc", "a"),
    ("log", "ln"),
    ("pi", "π"),
];

/// Map a superscript digit to its ASCII digit
pub(crate) fn superscript_digit(c: char) -> Option<char> {
    match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        _ => None,
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || ".,+-*/^()".contains(c)
        || "×÷·√π".contains(c)
        || superscript_digit(c).is_some()
}

/// Characters next to which a bare decimal point gets a `0`
fn is_operand_boundary(c: char) -> bool {
    "+-*/^(),×÷·".contains(c)
}

/// Run every text pass in order, returning the text handed to the lexer
pub(crate) fn prepare(input: &str) -> Result<String, NormalizeError> {
    let text: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if text.is_empty() {
        return Err(NormalizeError::EmptyString);
    }

    check_superscript_decimal(&text)?;
    check_characters(&text)?;

    let text = expand_aliases(&text);
    let text = collapse_signs(&text);
    let text = fix_decimals(&text);
    let text = balance_parentheses(&text);
    log::trace!("prepared text: {}", text);

    let (text, removed_empty) = remove_empty_parentheses(text);
    if text.is_empty() {
        return Err(if removed_empty {
            NormalizeError::EmptyParenthesis
        } else {
            NormalizeError::EmptyString
        });
    }

    Ok(text)
}

/// `x².5` could mean `x^2.5` or `x^2*.5`
fn check_superscript_decimal(text: &str) -> Result<(), NormalizeError> {
    let mut chars = text.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        if superscript_digit(c).is_some()
            && let Some(&(next_pos, '.')) = chars.peek()
        {
            return Err(NormalizeError::AmbiguousExponent {
                span: Some(Span::new(pos, next_pos + 1)),
            });
        }
    }
    Ok(())
}

fn check_characters(text: &str) -> Result<(), NormalizeError> {
    match text.char_indices().find(|&(_, c)| !is_allowed(c)) {
        Some((pos, found)) => Err(NormalizeError::InvalidCharacters {
            found,
            span: Some(Span::new(pos, pos + found.len_utf8())),
        }),
        None => Ok(()),
    }
}

pub(crate) fn expand_aliases(text: &str) -> String {
    ALIASES
        .iter()
        .fold(text.to_string(), |acc, (from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}

/// Collapse each run of `+`/`-` to one sign by the parity of its minuses
pub(crate) fn collapse_signs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '+' && c != '-' {
            out.push(c);
            continue;
        }
        let mut negative = c == '-';
        while let Some(&next) = chars.peek() {
            if next != '+' && next != '-' {
                break;
            }
            negative ^= next == '-';
            chars.next();
        }
        out.push(if negative { '-' } else { '+' });
    }

    out
}

/// `.5` becomes `0.5` and `5.` becomes `5.0` when the point touches an
/// operator, a parenthesis or the end of input. Other placements survive
/// until the decimal check after name validation.
pub(crate) fn fix_decimals(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c != '.' {
            out.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        if prev.is_none_or(is_operand_boundary) {
            out.push('0');
        }
        out.push('.');
        if next.is_none_or(is_operand_boundary) {
            out.push('0');
        }
    }

    out
}

/// Prepend `(` for every orphan `)` and append `)` for every unmatched `(`
pub(crate) fn balance_parentheses(text: &str) -> String {
    let mut depth = 0usize;
    let mut missing_open = 0usize;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => missing_open += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }

    if depth == 0 && missing_open == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + depth + missing_open);
    out.extend(std::iter::repeat_n('(', missing_open));
    out.push_str(text);
    out.extend(std::iter::repeat_n(')', depth));
    out
}

/// Strip `()` until none remain; reports whether anything was removed
pub(crate) fn remove_empty_parentheses(mut text: String) -> (String, bool) {
    let mut removed = false;
    while text.contains("()") {
        text = text.replace("()", "");
        removed = true;
    }
    (text, removed)
}
