use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// Represents one of the four supported arithmetic operators.
///
/// Operator tokens are resolved into this enum once, at the boundary, and
/// every later decision is an exhaustive `match` over it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Every supported operator, in symbol order `+ - * /`.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the textual symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Applies the operator to two operands using IEEE-754 double arithmetic.
    ///
    /// Only a zero divisor is rejected. Results that overflow saturate to
    /// infinity and are returned as-is.
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] when dividing by `0` or `-0`.
    ///
    /// # Example
    /// ```
    /// use calculator::{error::CalcError, operator::Operator};
    ///
    /// assert_eq!(Operator::Mul.apply(2.5, 2.0), Ok(5.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    /// assert_eq!(Operator::Add.apply(f64::MAX, f64::MAX), Ok(f64::INFINITY));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> CalcResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(CalcError::DivisionByZero);
                   }
                   left / right
               },
           })
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Matches the token exactly against `+`, `-`, `*` and `/`.
    ///
    /// Surrounding whitespace or any additional character makes the token
    /// invalid.
    fn from_str(token: &str) -> CalcResult<Self> {
        match token {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(CalcError::invalid_operator(token)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
