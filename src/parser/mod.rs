//! Parser module - converts free-form strings to the AST
mod implicit_mul;
mod lexer;
mod pratt;
pub(crate) mod prepare;
mod tokens;
mod validate;

use crate::{Expr, NormalizeError};

/// Parse a formula string into an expression AST
///
/// Accepts both free-form input (`2x²+xsin(x)`-style notation with unicode
/// operators, superscripts, aliases and implicit multiplication) and
/// canonical text such as `add(mul(2,x),3)`.
///
/// # Arguments
/// * `input` - The formula string to parse
/// * `allow_variable` - Whether `x` may appear; unset for constant-only input
///
/// # Errors
/// Returns the `NormalizeError` of the first pass that rejects the input.
pub fn parse(input: &str, allow_variable: bool) -> Result<Expr, NormalizeError> {
    // Pipeline: prepare -> lex -> adjacency -> names -> decimals -> implicit_mul -> parse

    // Steps 1-8: character level rewriting
    let prepared = prepare::prepare(input)?;

    // Names, numbers and unicode tokens
    let tokens = lexer::lex(&prepared)?;

    // Operator placement
    let tokens = validate::check_adjacency(tokens)?;
    validate::check_names(&tokens, allow_variable)?;
    validate::check_decimals(&tokens)?;

    // Insert implicit multiplication
    let tokens = implicit_mul::insert_implicit_multiplication(tokens);

    // Build AST
    pratt::parse_expression(&tokens)
}

/// Normalize input to canonical text
///
/// # Example
/// ```
/// use symb_taylor::normalize_with;
///
/// assert_eq!(normalize_with("2x+3", true).unwrap(), "add(mul(2,x),3)");
/// assert_eq!(
///     normalize_with("2x", false).unwrap_err().to_string(),
///     "VARIABLE NOT ALLOWED."
/// );
/// ```
pub fn normalize_with(input: &str, allow_variable: bool) -> Result<String, NormalizeError> {
    match parse(input, allow_variable) {
        Ok(expr) => {
            let canonical = expr.to_string();
            log::debug!("normalized {:?} -> {}", input, canonical);
            Ok(canonical)
        }
        Err(err) => {
            log::debug!("rejected {:?}: {}", input, err.detailed());
            Err(err)
        }
    }
}
