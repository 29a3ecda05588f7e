use crate::{
    error::CalcResult,
    operand::parse_operand,
    operator::Operator,
};

/// Evaluates `left <operator> right` for an operator given as text.
///
/// The operator token is resolved into an [`Operator`] first and then
/// applied. This is a pure function: nothing is logged and no state is kept
/// between calls.
///
/// # Errors
/// - [`CalcError::InvalidOperator`](crate::error::CalcError::InvalidOperator)
///   if the token is not exactly `+`, `-`, `*` or `/`.
/// - [`CalcError::DivisionByZero`](crate::error::CalcError::DivisionByZero)
///   if `operator` is `/` and `right` is zero.
///
/// # Example
/// ```
/// use calculator::{error::CalcError, evaluator::evaluate};
///
/// assert_eq!(evaluate(2.5, 2.0, "/"), Ok(1.25));
/// assert_eq!(evaluate(1.0, 1.0, "+-"), Err(CalcError::invalid_operator("+-")));
/// ```
pub fn evaluate(left: f64, right: f64, operator: &str) -> CalcResult<f64> {
    operator.parse::<Operator>()?.apply(left, right)
}

/// A successfully evaluated calculation.
///
/// Formatting a `Calculation` produces the line printed by the command-line
/// tool, e.g. `2.5 / 2 = 1.250000`. Very large or small operands use exponent
/// notation and overflowed results print as `+Inf`:
///
/// ```
/// use calculator::calculate;
///
/// let calculation = calculate("1e300", "*", "1e10").unwrap();
/// assert_eq!(calculation.to_string(), "1e+300 * 1e+10 = +Inf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// Left operand.
    pub left:     f64,
    /// The operator applied.
    pub operator: Operator,
    /// Right operand.
    pub right:    f64,
    /// The computed result.
    pub result:   f64,
}

impl Calculation {
    /// Parses three tokens and evaluates them.
    ///
    /// Tokens are checked in a fixed order: the left operand, the right
    /// operand, then the operator. The first failure is returned.
    ///
    /// # Example
    /// ```
    /// use calculator::evaluator::Calculation;
    ///
    /// let calculation = Calculation::from_tokens("1", "+", "1").unwrap();
    /// assert_eq!(calculation.result, 2.0);
    /// assert_eq!(calculation.to_string(), "1 + 1 = 2.000000");
    /// ```
    pub fn from_tokens(left: &str, operator: &str, right: &str) -> CalcResult<Self> {
        let left = parse_operand(left)?;
        let right = parse_operand(right)?;
        let operator = operator.parse::<Operator>()?;
        let result = operator.apply(left, right)?;

        Ok(Self { left,
                  operator,
                  right,
                  result })
    }
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_operand(f, self.left)?;
        write!(f, " {} ", self.operator)?;
        write_operand(f, self.right)?;
        f.write_str(" = ")?;
        write_result(f, self.result)
    }
}

/// Writes an operand with its shortest round-trip digits.
///
/// Decimal exponents below -4 or of 6 and above switch to exponent notation
/// with a signed, two-digit exponent: `1e+300`, `1.5e-07`, `1e+06`.
fn write_operand(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    let scientific = format!("{value:e}");

    // Non-finite values render without an exponent ("inf", "NaN").
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{value}");
    };
    let exponent: i32 = exponent.parse().map_err(|_| std::fmt::Error)?;

    if (-4..6).contains(&exponent) {
        write!(f, "{value}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Writes a result with six fractional digits. Overflowed results render as
/// `+Inf` or `-Inf`.
fn write_result(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value.is_sign_positive() { "+Inf" } else { "-Inf" })
    } else {
        write!(f, "{value:.6}")
    }
}
