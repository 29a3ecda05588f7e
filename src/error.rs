/// Result type used throughout the calculator.
///
/// Every fallible operation returns either a value of type `T` or a
/// [`CalcError`] describing why the calculation could not be carried out.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing or evaluating a
/// calculation.
///
/// The `Display` output of each variant is the exact message reported to the
/// user. Offending tokens are kept for diagnostics but never rendered.
pub enum CalcError {
    /// An operand token is not a valid floating-point literal.
    InvalidOperand {
        /// The token that failed to parse.
        token: String,
    },
    /// The operator token is not exactly one of `+`, `-`, `*` or `/`.
    InvalidOperator {
        /// The token that failed to match.
        token: String,
    },
    /// Division was requested with a zero divisor.
    DivisionByZero,
}

impl CalcError {
    /// Builds an [`CalcError::InvalidOperand`] for the given token.
    #[must_use]
    pub fn invalid_operand(token: &str) -> Self {
        Self::InvalidOperand { token: token.to_string() }
    }

    /// Builds an [`CalcError::InvalidOperator`] for the given token.
    #[must_use]
    pub fn invalid_operator(token: &str) -> Self {
        Self::InvalidOperator { token: token.to_string() }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { .. } => write!(f, "invalid operand"),
            Self::InvalidOperator { .. } => write!(f, "invalid operator"),
            Self::DivisionByZero => write!(f, "division by zero is not allowed"),
        }
    }
}

impl std::error::Error for CalcError {}
