#![allow(clippy::approx_constant, clippy::float_cmp)]

use calculator::{
    calculate,
    error::CalcError,
    evaluator::{Calculation, evaluate},
    operand::parse_operand,
    operator::Operator,
};

fn assert_result(left: f64, operator: &str, right: f64, expected: f64) {
    match evaluate(left, right, operator) {
        Ok(result) => assert!(result.to_bits() == expected.to_bits() || result == expected,
                              "{left} {operator} {right}: expected {expected}, got {result}"),
        Err(e) => panic!("{left} {operator} {right}: expected {expected}, got error {e}"),
    }
}

fn assert_error(left: f64, operator: &str, right: f64, expected: &str) {
    match evaluate(left, right, operator) {
        Ok(result) => panic!("{left} {operator:?} {right}: expected error, got {result}"),
        Err(e) => assert_eq!(e.to_string(), expected, "{left} {operator:?} {right}"),
    }
}

#[test]
fn addition() {
    assert_result(1.0, "+", 1.0, 2.0);
    assert_result(0.99, "+", 0.01, 1.0);
    assert_result(3.14, "+", 3.14, 6.28);
    assert_result(1.123_456_7, "+", 1.0, 2.123_456_7);
    assert_result(-1.0, "+", 1.0, 0.0);
    assert_result(0.0, "+", 0.0, 0.0);
    assert_result(5.0, "+", -10.0, -5.0);
}

#[test]
fn subtraction() {
    assert_result(1.0, "-", 1.0, 0.0);
    assert_result(0.99, "-", 0.01, 0.98);
    assert_result(3.14, "-", -3.14, 6.28);
    assert_result(-1.0, "-", 1.0, -2.0);
    assert_result(f64::MAX, "-", f64::MAX, 0.0);
    assert_result(f64::from_bits(1), "-", f64::from_bits(1), 0.0);
}

#[test]
fn multiplication() {
    assert_result(1.0, "*", 1.0, 1.0);
    assert_result(0.99, "*", 0.01, 0.0099);
    assert_result(3.14, "*", -3.14, -9.8596);
    assert_result(0.0, "*", 0.0, 0.0);
    assert_result(2.5, "*", 2.0, 5.0);
}

#[test]
fn division() {
    assert_result(1.0, "/", 1.0, 1.0);
    assert_result(0.99, "/", 0.01, 99.0);
    assert_result(3.14, "/", -3.14, -1.0);
    assert_result(0.0, "/", -3.14, 0.0);
    assert_result(f64::MAX, "/", f64::MAX, 1.0);
    assert_result(f64::from_bits(1), "/", f64::from_bits(1), 1.0);
    assert_result(2.5, "/", 2.0, 1.25);
}

#[test]
fn division_by_zero_is_rejected() {
    assert_error(1.0, "/", 0.0, "division by zero is not allowed");
    assert_error(-7.5, "/", 0.0, "division by zero is not allowed");
    assert_error(0.0, "/", -0.0, "division by zero is not allowed");
    assert_eq!(Operator::Div.apply(f64::MAX, 0.0), Err(CalcError::DivisionByZero));
}

#[test]
fn overflow_saturates_to_infinity() {
    assert_result(f64::MAX, "+", f64::MAX, f64::INFINITY);
    assert_result(f64::MAX, "*", 10.0, f64::INFINITY);
    assert_result(-f64::MAX, "-", f64::MAX, f64::NEG_INFINITY);
    assert_result(f64::from_bits(1), "*", f64::from_bits(1), 0.0);
}

#[test]
fn invalid_operators() {
    for operator in ["", "+-", "\n*\t", "\n\t+", " +", "+ ", "x", "ab", "÷", "%", "**", "//"] {
        assert_error(1.0, operator, 1.0, "invalid operator");
    }
    assert_eq!(evaluate(1.0, 3.0, "ab"), Err(CalcError::invalid_operator("ab")));
}

#[test]
fn operator_symbols() {
    let symbols: Vec<String> = Operator::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(symbols, ["+", "-", "*", "/"]);

    for operator in Operator::ALL {
        assert_eq!(operator.symbol().parse::<Operator>(), Ok(operator));
    }
}

#[test]
fn operands_parse() {
    assert_eq!(parse_operand("1"), Ok(1.0));
    assert_eq!(parse_operand("0.0000"), Ok(0.0));
    assert_eq!(parse_operand("3.14"), Ok(3.14));
    assert_eq!(parse_operand("-3.14"), Ok(-3.14));
    assert_eq!(parse_operand("+2"), Ok(2.0));
    assert_eq!(parse_operand(".5"), Ok(0.5));
    assert_eq!(parse_operand("5."), Ok(5.0));
    assert_eq!(parse_operand("2.1e-10"), Ok(2.1e-10));
    assert_eq!(parse_operand("1E3"), Ok(1000.0));
    assert_eq!(parse_operand("1.7976931348623157e+308"), Ok(f64::MAX));
    assert_eq!(parse_operand("5e-324"), Ok(f64::from_bits(1)));
}

#[test]
fn invalid_operands() {
    for token in ["abc", "", " ", " 1", "1 ", "1,5", "1.2.3", "1e", "e5", "--1", "0x10", "1_000",
                  "-", "."]
    {
        assert_eq!(parse_operand(token),
                   Err(CalcError::invalid_operand(token)),
                   "token {token:?}");
    }
}

#[test]
fn special_float_spellings_are_rejected() {
    for token in ["NaN", "nan", "inf", "+inf", "-inf", "Infinity", "-infinity"] {
        assert_eq!(parse_operand(token), Err(CalcError::invalid_operand(token)));
    }
}

#[test]
fn out_of_range_literals_are_rejected() {
    assert!(parse_operand("1e400").is_err());
    assert!(parse_operand("-1e400").is_err());
    assert_eq!(parse_operand("1e-400"), Ok(0.0));
}

#[test]
fn calculations_render() {
    let cases = [(("1", "+", "1"), "1 + 1 = 2.000000"),
                 (("2.5", "/", "2"), "2.5 / 2 = 1.250000"),
                 (("2.5", "-", "2"), "2.5 - 2 = 0.500000"),
                 (("2.5", "*", "2"), "2.5 * 2 = 5.000000"),
                 (("-1.5", "*", "2"), "-1.5 * 2 = -3.000000"),
                 (("123456", "*", "1"), "123456 * 1 = 123456.000000"),
                 (("1000000", "-", "1"), "1e+06 - 1 = 999999.000000"),
                 (("0.0001", "+", "0"), "0.0001 + 0 = 0.000100"),
                 (("0.00001", "+", "0"), "1e-05 + 0 = 0.000010"),
                 (("1.5e-7", "*", "2"), "1.5e-07 * 2 = 0.000000"),
                 (("-0", "+", "0"), "-0 + 0 = 0.000000")];

    for ((left, operator, right), expected) in cases {
        match calculate(left, operator, right) {
            Ok(calculation) => assert_eq!(calculation.to_string(), expected),
            Err(e) => panic!("{left} {operator} {right} failed: {e}"),
        }
    }
}

#[test]
fn overflowed_results_render_as_signed_infinity() {
    let cases = [(("1e300", "*", "1e10"), "1e+300 * 1e+10 = +Inf"),
                 (("-1e300", "*", "1e10"), "-1e+300 * 1e+10 = -Inf"),
                 (("1.7976931348623157e308", "+", "1.7976931348623157e308"),
                  "1.7976931348623157e+308 + 1.7976931348623157e+308 = +Inf")];

    for ((left, operator, right), expected) in cases {
        match calculate(left, operator, right) {
            Ok(calculation) => assert_eq!(calculation.to_string(), expected),
            Err(e) => panic!("{left} {operator} {right} failed: {e}"),
        }
    }
}

#[test]
fn calculation_fields() {
    assert_eq!(Calculation::from_tokens("10", "/", "4"),
               Ok(Calculation { left:     10.0,
                                operator: Operator::Div,
                                right:    4.0,
                                result:   2.5, }));
}

#[test]
fn calculation_errors_in_order() {
    assert_eq!(calculate("1", "/", "0"), Err(CalcError::DivisionByZero));
    assert_eq!(calculate("1", "ab", "3"), Err(CalcError::invalid_operator("ab")));
    assert_eq!(calculate("1", "+", "x"), Err(CalcError::invalid_operand("x")));
    assert_eq!(calculate("x", "ab", "y"), Err(CalcError::invalid_operand("x")));
    assert_eq!(calculate("1", "ab", "y"), Err(CalcError::invalid_operand("y")));
}

#[test]
fn error_messages() {
    assert_eq!(CalcError::invalid_operand("x").to_string(), "invalid operand");
    assert_eq!(CalcError::invalid_operator("?").to_string(), "invalid operator");
    assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero is not allowed");
}
