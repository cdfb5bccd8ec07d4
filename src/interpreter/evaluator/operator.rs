use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Value},
        token::Operator,
    },
    util::num::{combinations, degrees_to_radians, factorial, is_even_integer, permutations},
};

/// The operands an operator consumes, shaped by its arity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<'a> {
    /// Predecessor and successor, `a op b`.
    Infix(&'a Value, &'a Value),
    /// Successor only, `op b`.
    Prefix(&'a Value),
    /// Predecessor only, `a op`.
    Postfix(&'a Value),
}

impl Operator {
    /// Applies the operator to its operands.
    ///
    /// The operands must match the operator's [`arity`](Operator::arity).
    ///
    /// # Errors
    /// The domain failures of roots, division, modulo, logarithms and the
    /// factorial-based operators.
    ///
    /// # Example
    /// ```
    /// use tiercalc::interpreter::{
    ///     evaluator::{core::Value, operator::Operands},
    ///     token::Operator,
    /// };
    ///
    /// let three = Value::computed(3.0);
    /// let eight = Value::computed(-8.0);
    ///
    /// let cube_root = Operator::Root.apply(Operands::Infix(&three, &eight)).unwrap();
    /// assert_eq!(cube_root, -2.0);
    ///
    /// let abs = Operator::Abs.apply(Operands::Prefix(&eight)).unwrap();
    /// assert_eq!(abs, 8.0);
    ///
    /// let six = Operator::Factorial.apply(Operands::Postfix(&three)).unwrap();
    /// assert_eq!(six, 6.0);
    /// ```
    pub fn apply(self, operands: Operands<'_>) -> EvalResult<f64> {
        use Operands::{Infix, Postfix, Prefix};

        match (self, operands) {
            (Self::Pow, Infix(a, b)) => Ok(a.number.powf(b.number)),
            (Self::Root, Infix(a, b)) => root(a.number, b.number),
            (Self::Mul, Infix(a, b)) => Ok(a.number * b.number),
            (Self::Div, Infix(a, b)) => divide(a.number, b.number),
            (Self::Modulo, Infix(a, b)) => modulo(a, b),
            (Self::Log, Infix(a, b)) => logarithm(a.number, b.number),
            (Self::Combination, Infix(a, b)) => combinations(a.number, b.number),
            (Self::Permutation, Infix(a, b)) => permutations(a.number, b.number),
            (Self::Add, Infix(a, b)) => Ok(a.number + b.number),
            (Self::Sub, Infix(a, b)) => Ok(a.number - b.number),
            (Self::Factorial, Postfix(a)) => factorial(a.number),
            (Self::Sin, Prefix(b)) => Ok(b.number.sin()),
            (Self::Cos, Prefix(b)) => Ok(b.number.cos()),
            (Self::Tan, Prefix(b)) => Ok(b.number.tan()),
            (Self::SinDeg, Prefix(b)) => Ok(degrees_to_radians(b.number).sin()),
            (Self::CosDeg, Prefix(b)) => Ok(degrees_to_radians(b.number).cos()),
            (Self::TanDeg, Prefix(b)) => Ok(degrees_to_radians(b.number).tan()),
            (Self::Abs, Prefix(b)) => Ok(b.number.abs()),
            (op, operands) => unreachable!("{op} cannot take {operands:?}"),
        }
    }
}

/// The `index`-th root of `radicand`, keeping the radicand's sign.
fn root(index: f64, radicand: f64) -> EvalResult<f64> {
    if index == 0.0 {
        return Err(RuntimeError::ZeroRoot { radicand });
    }
    if radicand < 0.0 && is_even_integer(index) {
        return Err(RuntimeError::NegativeEvenRoot { index, radicand });
    }

    let magnitude = if index == 2.0 {
        radicand.abs().sqrt()
    } else {
        radicand.abs().powf(1.0 / index)
    };

    Ok(if radicand < 0.0 { -magnitude } else { magnitude })
}

fn divide(dividend: f64, divisor: f64) -> EvalResult<f64> {
    if divisor == 0.0 {
        if dividend == 0.0 {
            return Err(RuntimeError::ZeroOverZero);
        }
        return Err(RuntimeError::DivisionByZero { dividend });
    }

    Ok(dividend / divisor)
}

/// Integer remainder of the truncated operands, signed like the dividend.
fn modulo(dividend: &Value, divisor: &Value) -> EvalResult<f64> {
    if !dividend.is_integral() || !divisor.is_integral() {
        return Err(RuntimeError::NonIntegerModulo { dividend: dividend.number,
                                                    divisor:  divisor.number, });
    }

    let divisor = divisor.number.trunc();
    if divisor == 0.0 {
        return Err(RuntimeError::ModuloByZero { dividend: dividend.number });
    }

    // Adding zero turns a negative zero remainder into zero.
    Ok(dividend.number.trunc() % divisor + 0.0)
}

/// Logarithm of `value` to `base`.
fn logarithm(value: f64, base: f64) -> EvalResult<f64> {
    if value == 0.0 || base == 0.0 {
        return Err(RuntimeError::LogDomain { value, base });
    }

    Ok(value.ln() / base.ln())
}
