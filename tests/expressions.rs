use rstest::rstest;
use tiercalc::{
    calculate,
    error::{Delimiter, Error, ParseError, RuntimeError},
    interpreter::session::Session,
};

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match calculate(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expression {src:?} should fail at runtime, got {other:?}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match calculate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expression {src:?} should fail to parse, got {other:?}"),
    }
}

#[rstest]
#[case("1 + 1 - 2", 0.0)]
#[case("1 / 2", 0.5)]
#[case("5 * (5 + 5)", 50.0)]
#[case("2 * (3 + (2 + 6.1) * 4) + ( 2 // 9 ! ) + 200 ** 0 + -5 * (1 + 2) ! + 5 % 2",
       645.195_219_104_534_3)]
#[case("8 log 10", 0.903_089_986_991_943_4)]
fn reference_expressions(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[rstest]
#[case("2 + 3 * 4", 14.0)]
#[case("2 * 3 ** 2", 18.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("2 ** 3 ** 2", 64.0)]
#[case("64 / 4 / 2", 8.0)]
#[case("100 log 10 * 2", 100.0_f64.ln() / 20.0_f64.ln())]
#[case("2 + 8 log 10", 1.0)]
fn tiers_reduce_left_to_right(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[rstest]
#[case("3 ! + 1", 7.0)]
#[case("3 ! !", 720.0)]
#[case("0 !", 1.0)]
#[case("2 ** 3 !", 64.0)]
#[case("(1 + 2) !", 6.0)]
#[case("5 nCr 2", 10.0)]
#[case("5 nPr 2", 20.0)]
#[case("2 * 5 nCr 2", 45.0)]
fn factorials_and_combinatorics(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[rstest]
#[case("2 // 9", 3.0)]
#[case("3 // -8", -2.0)]
#[case("abs -5", 5.0)]
#[case("abs (2 - 7) * 2", 10.0)]
#[case("sin 0", 0.0)]
#[case("cos 0 + 1", 2.0)]
#[case("dcos 0", 1.0)]
#[case("dsin 90", 1.0)]
#[case("-7 % 2", -1.0)]
#[case("-4 % 2", 0.0)]
#[case("(7 - 0.5 * 2) % 4", 2.0)]
#[case("(5 / 2) % 2", 0.0)]
#[case("2 ** 0.5 % 1", 0.0)]
#[case("7 % (5 / 2)", 1.0)]
fn functions_and_remainders(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[rstest]
#[case("pi", std::f64::consts::PI)]
#[case("-tau", -std::f64::consts::TAU)]
#[case("e", std::f64::consts::E)]
#[case("g * 2", 19.6133)]
#[case("c", 299_792_458.0)]
#[case("phi - 1 / phi", 1.0)]
fn constants(#[case] src: &str, #[case] expected: f64) {
    let value = calculate(src).unwrap();
    assert!((value - expected).abs() < 1e-12, "{src} = {value}");
}

#[test]
fn delimiters_attach_to_neighbors() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("( 2 + 3 ) * 4", 20.0);
    assert_value("2  *  3", 6.0);
    assert_value("((2 + 3) * 4)", 20.0);
}

#[test]
fn division_by_zero() {
    assert!(matches!(runtime_failure("1 / 0"), RuntimeError::DivisionByZero { dividend } if dividend == 1.0));
    assert_eq!(runtime_failure("0 / 0"), RuntimeError::ZeroOverZero);
    assert_eq!(runtime_failure("(1 - 1) / (2 - 2)"), RuntimeError::ZeroOverZero);
    assert!(calculate("0 / 0").unwrap_err().is_fatal());
    assert!(!calculate("1 / 0").unwrap_err().is_fatal());
}

#[test]
fn domain_failures() {
    assert!(matches!(runtime_failure("5 % 2.5"), RuntimeError::NonIntegerModulo { .. }));
    assert!(matches!(runtime_failure("pi % 2"), RuntimeError::NonIntegerModulo { .. }));
    assert!(matches!(runtime_failure("5 % 0"), RuntimeError::ModuloByZero { .. }));
    assert!(matches!(runtime_failure("-1 !"), RuntimeError::FactorialDomain { .. }));
    assert!(matches!(runtime_failure("3.5 !"), RuntimeError::FactorialDomain { .. }));
    assert!(matches!(runtime_failure("2 nCr 5"), RuntimeError::FactorialDomain { .. }));
    assert!(matches!(runtime_failure("0 // 4"), RuntimeError::ZeroRoot { .. }));
    assert!(matches!(runtime_failure("2 // -4"), RuntimeError::NegativeEvenRoot { .. }));
    assert!(matches!(runtime_failure("0 log 10"), RuntimeError::LogDomain { .. }));
    assert!(matches!(runtime_failure("10 log 0"), RuntimeError::LogDomain { .. }));
}

#[test]
fn structural_failures() {
    assert!(matches!(runtime_failure("1 +"), RuntimeError::MissingOperand { index: 1, operator: "+" }));
    assert!(matches!(runtime_failure("! 3"), RuntimeError::MissingOperand { index: 0, operator: "!" }));
    assert!(matches!(runtime_failure("sin"), RuntimeError::MissingOperand { index: 0, operator: "sin" }));
    assert!(matches!(runtime_failure("2 * * 3"), RuntimeError::MissingOperand { index: 1, .. }));
    assert!(matches!(runtime_failure("2 3"), RuntimeError::TooManyResults { .. }));
    assert_eq!(runtime_failure(""), RuntimeError::EmptyExpression);
    assert_eq!(runtime_failure("1 + ( )"), RuntimeError::EmptyExpression);
}

#[test]
fn syntax_failures() {
    assert_eq!(parse_failure("(1 + 2"), ParseError::UnmatchedParen { surplus: Delimiter::Open });
    assert_eq!(parse_failure("1 + 2)"), ParseError::UnmatchedParen { surplus: Delimiter::Close });
    assert_eq!(parse_failure(") 1 + 2 ("), ParseError::UnmatchedParen { surplus: Delimiter::Close });
    assert!(matches!(parse_failure("(1)"), ParseError::MixedDelimiters { .. }));
    assert!(matches!(parse_failure("1 ^ 2"), ParseError::UnknownToken { .. }));
    assert!(matches!(parse_failure("1+2"), ParseError::UnknownToken { .. }));
    assert_eq!(parse_failure("ans"), ParseError::NoPriorAnswer);
}

#[test]
fn session_keeps_last_answer_across_failures() {
    let mut session = Session::new();

    assert_eq!(session.evaluate_line("6 * 7").unwrap(), 42.0);
    assert!(session.evaluate_line("ans / 0").is_err());
    assert!(session.evaluate_line("ans +").is_err());
    assert_eq!(session.last_answer(), Some(42.0));
    assert_eq!(session.evaluate_line("-ans + 2").unwrap(), -40.0);
    assert_eq!(session.evaluate_line("ans").unwrap(), -40.0);
}
