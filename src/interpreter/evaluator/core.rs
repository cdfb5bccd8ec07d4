use log::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::operator::Operands,
        grouper::group,
        token::{Arity, Operator, Priority, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A resolved number together with the literal text it was written as.
///
/// Values computed by an operator or a group carry no literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// The numeric value.
    pub number:  f64,
    /// The source text for values read straight from a number token.
    pub literal: Option<String>,
}

impl Value {
    /// A value produced by a computation rather than read from the input.
    #[must_use]
    pub const fn computed(number: f64) -> Self {
        Self { number,
               literal: None }
    }

    /// Whether the value may take part in a modulo.
    ///
    /// Only literal text is checked: a literal qualifies when written without
    /// a decimal point. Computed values always qualify and are truncated.
    ///
    /// # Example
    /// ```
    /// use tiercalc::interpreter::evaluator::core::Value;
    ///
    /// let written = Value { number:  2.5,
    ///                       literal: Some("2.5".to_string()) };
    /// assert!(!written.is_integral());
    /// assert!(Value::computed(2.5).is_integral());
    /// ```
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.literal.as_deref().is_none_or(|text| !text.contains('.'))
    }
}

/// One position of a sequence under reduction.
#[derive(Debug, Clone, PartialEq)]
enum Item {
    Value(Value),
    Operator(Operator),
}

impl Item {
    const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Operator(_) => None,
        }
    }
}

/// Reduces a token sequence to a single number.
///
/// Each call works on one sequence, independently of any enclosing one:
/// 1. Number tokens are parsed and every group is evaluated recursively.
/// 2. Every `!` collapses with the value before it.
/// 3. Tiers A, B and C are reduced in that order. Within a tier the leftmost
///    operator is applied first, replacing itself and its operands with the
///    result, until no operator of the tier is left.
///
/// Ungrouped input (still holding `(` and `)`) is grouped first.
///
/// # Errors
/// Any [`RuntimeError`] raised by literal parsing, missing operands, operator
/// domain checks, or a sequence that does not reduce to exactly one value.
///
/// # Example
/// ```
/// use tiercalc::interpreter::{evaluator::core::evaluate, grouper::group, lexer::tokenize};
///
/// let tokens = group(&tokenize("5 * (5 + 5)", None).unwrap());
/// assert_eq!(evaluate(&tokens).unwrap(), 50.0);
///
/// // Left to right inside a tier, powers included.
/// let tokens = tokenize("2 ** 3 ** 2", None).unwrap();
/// assert_eq!(evaluate(&tokens).unwrap(), 64.0);
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    if tokens.iter().any(|token| matches!(token, Token::OpenGroup | Token::CloseGroup)) {
        return evaluate(&group(tokens));
    }

    let resolved = resolve(tokens)?;
    let mut items = fold_factorials(resolved)?;
    for tier in Priority::REDUCTION_ORDER {
        items = reduce_tier(items, tier)?;
    }

    let result = single_result(items)?;
    debug!("evaluated {} tokens to {result}", tokens.len());
    Ok(result)
}

/// Parses literals and evaluates nested groups.
fn resolve(tokens: &[Token]) -> EvalResult<Vec<Item>> {
    let mut items = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(text) => {
                let number = text.parse::<f64>()
                                 .map_err(|_| RuntimeError::NumberFormat { text: text.clone() })?;
                items.push(Item::Value(Value { number,
                                               literal: Some(text.clone()) }));
            },
            Token::Group(children) => {
                items.push(Item::Value(Value::computed(evaluate(children)?)));
            },
            Token::Operator(op) => items.push(Item::Operator(*op)),
            Token::OpenGroup | Token::CloseGroup => {
                unreachable!("delimiters are removed by grouping before resolution")
            },
        }
    }

    Ok(items)
}

/// Collapses every `[value, !]` pair into the value's factorial.
///
/// Runs before any tier is reduced, so `3 ! + 1` sees `6 + 1`. Chained
/// factorials apply in turn.
fn fold_factorials(items: Vec<Item>) -> EvalResult<Vec<Item>> {
    let mut folded = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        if item != Item::Operator(Operator::Factorial) {
            folded.push(item);
            continue;
        }

        match folded.pop() {
            Some(Item::Value(operand)) => {
                let result = Operator::Factorial.apply(Operands::Postfix(&operand))?;
                trace!("{} ! -> {result}", operand.number);
                folded.push(Item::Value(Value::computed(result)));
            },
            _ => {
                return Err(RuntimeError::MissingOperand { index,
                                                          operator: Operator::Factorial.symbol() });
            },
        }
    }

    Ok(folded)
}

/// Applies operators of one tier, leftmost first, until none are left.
fn reduce_tier(mut items: Vec<Item>, tier: Priority) -> EvalResult<Vec<Item>> {
    while let Some(index) =
        items.iter()
             .position(|item| matches!(item, Item::Operator(op) if op.priority() == tier))
    {
        items = reduce_at(items, index)?;
    }

    Ok(items)
}

/// Applies the operator at `index` and returns the sequence with the operator
/// and its operands replaced by the result.
fn reduce_at(items: Vec<Item>, index: usize) -> EvalResult<Vec<Item>> {
    let Item::Operator(op) = items[index] else {
        unreachable!("reduce_at is only called on operator positions")
    };

    let left = || index.checked_sub(1).and_then(|i| items.get(i)).and_then(Item::as_value);
    let right = || items.get(index + 1).and_then(Item::as_value);

    let arity = op.arity();
    let operands = match arity {
        Arity::LeftRight => left().zip(right()).map(|(a, b)| Operands::Infix(a, b)),
        Arity::Left => left().map(Operands::Postfix),
        Arity::Right => right().map(Operands::Prefix),
        Arity::None => None,
    }.ok_or(RuntimeError::MissingOperand { index,
                                          operator: op.symbol() })?;

    let result = op.apply(operands)?;
    trace!("{:?} tier: {op} at index {index} -> {result}", op.priority());

    let start = if arity.takes_left() { index - 1 } else { index };
    let consumed = index + 1 - start + usize::from(arity.takes_right());

    let mut reduced = Vec::with_capacity(items.len() + 1 - consumed);
    let mut rest = items.into_iter();
    reduced.extend(rest.by_ref().take(start));
    reduced.push(Item::Value(Value::computed(result)));
    reduced.extend(rest.skip(consumed));

    Ok(reduced)
}

/// Extracts the single remaining value.
fn single_result(items: Vec<Item>) -> EvalResult<f64> {
    let mut numbers = items.into_iter().map(|item| match item {
                                           Item::Value(value) => value.number,
                                           Item::Operator(op) => {
                                               unreachable!("operator {op} survived every tier")
                                           },
                                       });

    match (numbers.next(), numbers.next()) {
        (Some(result), None) => Ok(result),
        (Some(first), Some(second)) => Err(RuntimeError::TooManyResults { first, second }),
        (None, _) => Err(RuntimeError::EmptyExpression),
    }
}
