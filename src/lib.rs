//! # calculator
//!
//! calculator is a four-function command-line calculator written in Rust.
//! It parses two numeric operands and an operator token, performs the
//! arithmetic operation, and reports the result or a descriptive error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcResult, evaluator::Calculation};

/// Provides the error type shared by parsing and evaluation.
///
/// This module defines the three ways a calculation can fail. Each error's
/// `Display` text is the exact message shown to the user.
///
/// # Responsibilities
/// - Defines `CalcError` for invalid operands, invalid operators and division
///   by zero.
/// - Provides the `CalcResult` alias used by every fallible function.
pub mod error;
/// Evaluates parsed operands with an operator.
///
/// This module dispatches a textual or resolved operator over two operands
/// and packages successful results as a printable `Calculation`.
pub mod evaluator;
/// Converts operand tokens into numbers.
///
/// Operands are lexed with a single-token lexer that only accepts decimal
/// floating-point literals.
pub mod operand;
/// The closed set of arithmetic operators.
pub mod operator;
/// Supporting infrastructure for the command-line tool.
///
/// # Responsibilities
/// - Sets up timestamped logging on standard error.
pub mod util;

/// Returns the evaluated calculation for three command-line tokens.
///
/// The left and right operands are parsed first, then the operator is
/// resolved and applied. If any step fails, the first error encountered is
/// returned and no result is produced.
///
/// # Errors
/// Returns an error if either operand is not a number, the operator is not
/// one of `+ - * /`, or a division by zero is requested.
///
/// # Examples
/// ```
/// use calculator::calculate;
///
/// let calculation = calculate("2.5", "/", "2").unwrap();
/// assert_eq!(calculation.to_string(), "2.5 / 2 = 1.250000");
///
/// let error = calculate("1", "/", "0").unwrap_err();
/// assert_eq!(error.to_string(), "division by zero is not allowed");
/// ```
pub fn calculate(left: &str, operator: &str, right: &str) -> CalcResult<Calculation> {
    Calculation::from_tokens(left, operator, right)
}
