use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest operand whose factorial is finite as an `f64` (`170!` ≈ 7.3e306).
pub const MAX_FACTORIAL_OPERAND: f64 = 170.0;

/// Computes `n!` for a non-negative integral `n`.
///
/// `0! = 1! = 1` and `n! = n * (n - 1)!` otherwise. Operands beyond
/// [`MAX_FACTORIAL_OPERAND`] overflow to infinity without recursing.
///
/// ## Errors
/// Returns [`RuntimeError::FactorialDomain`] if `n` is negative, fractional
/// or not finite.
///
/// ## Example
/// ```
/// use tiercalc::{error::RuntimeError, util::num::factorial};
///
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(171.0).unwrap(), f64::INFINITY);
///
/// let err = factorial(3.5).unwrap_err();
/// assert!(matches!(err, RuntimeError::FactorialDomain { .. }));
/// assert!(factorial(-1.0).is_err());
/// ```
pub fn factorial(n: f64) -> EvalResult<f64> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(RuntimeError::FactorialDomain { value: n });
    }

    Ok(factorial_of_integer(n))
}

fn factorial_of_integer(n: f64) -> f64 {
    if n > MAX_FACTORIAL_OPERAND {
        return f64::INFINITY;
    }
    if n <= 1.0 {
        return 1.0;
    }
    n * factorial_of_integer(n - 1.0)
}

/// Number of ordered selections of `r` items out of `n`: `n! / (n - r)!`.
///
/// ## Errors
/// Fails like [`factorial`] if `n` or `n - r` is not a non-negative integer.
///
/// ## Example
/// ```
/// use tiercalc::util::num::permutations;
///
/// assert_eq!(permutations(5.0, 2.0).unwrap(), 20.0);
/// assert!(permutations(2.0, 5.0).is_err());
/// ```
pub fn permutations(n: f64, r: f64) -> EvalResult<f64> {
    Ok(factorial(n)? / factorial(n - r)?)
}

/// Number of unordered selections of `r` items out of `n`:
/// `n! / (r! * (n - r)!)`.
///
/// ## Errors
/// Fails like [`factorial`] if `n`, `r` or `n - r` is not a non-negative
/// integer.
///
/// ## Example
/// ```
/// use tiercalc::util::num::combinations;
///
/// assert_eq!(combinations(5.0, 2.0).unwrap(), 10.0);
/// assert_eq!(combinations(4.0, 0.0).unwrap(), 1.0);
/// assert!(combinations(4.5, 2.0).is_err());
/// ```
pub fn combinations(n: f64, r: f64) -> EvalResult<f64> {
    Ok(factorial(n)? / (factorial(r)? * factorial(n - r)?))
}

/// Converts an angle in degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Whether `x` is an even integer, `-4`, `0` and `2` included.
#[must_use]
pub fn is_even_integer(x: f64) -> bool {
    x.fract() == 0.0 && x % 2.0 == 0.0
}

/// Renders a result as the shortest decimal text that parses back to the same
/// value, never in scientific notation.
///
/// ## Example
/// ```
/// use tiercalc::util::num::format_number;
///
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(50.0), "50");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
