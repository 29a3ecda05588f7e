use logos::Logos;

use crate::error::{CalcError, CalcResult};

/// Lexical tokens recognised inside a single operand.
///
/// A well-formed operand lexes to exactly one [`OperandToken::Number`]; any
/// other outcome (no token, a lexing error, or trailing input) means the text
/// is not a number.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum OperandToken {
    /// Base-10 floating-point literals such as `42`, `-3.14`, `.5`, `5.` or
    /// `1.7976931348623157e+308`.
    #[regex(r"[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
}

/// Parses an operand token into a 64-bit float.
///
/// The token must consist of a single decimal literal with an optional sign,
/// an optional fractional part and an optional exponent. Whitespace is never
/// trimmed. Spellings such as `NaN`, `inf` or `-infinity` are not numbers and
/// are rejected, as are literals too large to be represented by an `f64`.
///
/// # Errors
/// Returns [`CalcError::InvalidOperand`] if the token is not a valid literal.
///
/// # Example
/// ```
/// use calculator::{error::CalcError, operand::parse_operand};
///
/// assert_eq!(parse_operand("-3.14"), Ok(-3.14));
/// assert_eq!(parse_operand("2.5e3"), Ok(2500.0));
/// assert_eq!(parse_operand("abc"), Err(CalcError::invalid_operand("abc")));
/// assert!(parse_operand("NaN").is_err());
/// ```
pub fn parse_operand(token: &str) -> CalcResult<f64> {
    let mut lexer = OperandToken::lexer(token);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(OperandToken::Number(value))), None) => Ok(value),
        _ => Err(CalcError::invalid_operand(token)),
    }
}

/// Converts the current literal slice into a finite `f64`.
///
/// Returning `None` turns the match into a lexing error, which is how out of
/// range literals like `1e400` end up rejected.
fn parse_float(lex: &logos::Lexer<OperandToken>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}
