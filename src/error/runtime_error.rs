#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while reducing a token tree.
pub enum RuntimeError {
    /// A number literal could not be parsed as a float.
    #[error("Cannot convert to number: {text}")]
    NumberFormat {
        /// The literal text.
        text: String,
    },
    /// An operator lacks a neighbor it needs as operand.
    #[error("Operator at index {index} missing argument(s): {operator}\nNote: The first index is 0")]
    MissingOperand {
        /// Position of the operator in its (group's) sequence.
        index:    usize,
        /// Spelling of the operator.
        operator: &'static str,
    },
    /// Factorial of a negative or fractional number.
    #[error("Factorial is only defined for non-negative integers, but found {value} !")]
    FactorialDomain {
        /// The rejected operand.
        value: f64,
    },
    /// `0 // x`.
    #[error("Can't get the 0th root: 0 // {radicand}")]
    ZeroRoot {
        /// The number whose root was requested.
        radicand: f64,
    },
    /// An even root of a negative number.
    #[error("Negative numbers do not have roots of even numbers: {index} // {radicand}")]
    NegativeEvenRoot {
        /// The degree of the root.
        index:    f64,
        /// The negative radicand.
        radicand: f64,
    },
    /// Division of a non-zero number by zero.
    #[error("You can't divide by 0: {dividend} / 0")]
    DivisionByZero {
        /// The non-zero dividend.
        dividend: f64,
    },
    /// Zero divided by zero. Ends the process in every mode.
    #[error("You can't divide by 0: 0 / 0")]
    ZeroOverZero,
    /// Modulo with a divisor that truncates to zero.
    #[error("You can't take the modulo of 0: {dividend} % 0")]
    ModuloByZero {
        /// The dividend.
        dividend: f64,
    },
    /// Modulo on a decimal operand.
    #[error("Cannot perform modulo on float values: {dividend} % {divisor}")]
    NonIntegerModulo {
        /// Left operand.
        dividend: f64,
        /// Right operand.
        divisor:  f64,
    },
    /// Logarithm with zero as argument or base.
    #[error("Logarithm with zero as base or x: {value} log {base}")]
    LogDomain {
        /// The argument of the logarithm.
        value: f64,
        /// The base.
        base:  f64,
    },
    /// Reduction left more than one value behind.
    #[error("Too many calculation results: {first} {second}\nMaybe you forgot an operator?")]
    TooManyResults {
        /// The first remaining value.
        first:  f64,
        /// The second remaining value.
        second: f64,
    },
    /// Nothing to evaluate, either a blank line or `( )`.
    #[error("Nothing to calculate")]
    EmptyExpression,
}
