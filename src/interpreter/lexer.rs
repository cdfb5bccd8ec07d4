use log::{debug, trace};

use crate::{
    error::{Delimiter, ParseError},
    interpreter::{
        classifier::{Atom, classify},
        token::{NamedConstant, Token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Splits one whitespace-delimited chunk into atoms.
///
/// Every `(` or `)` becomes an atom of its own; the text around it is kept as
/// separate atoms when non-empty. A chunk may contain only one kind of
/// delimiter.
///
/// # Errors
/// Returns [`ParseError::MixedDelimiters`] if the chunk holds both `(` and
/// `)`.
///
/// # Example
/// ```
/// use tiercalc::interpreter::lexer::split_atoms;
///
/// assert_eq!(split_atoms("(9").unwrap(), vec!["(", "9"]);
/// assert_eq!(split_atoms("9)").unwrap(), vec!["9", ")"]);
/// assert_eq!(split_atoms("**").unwrap(), vec!["**"]);
/// assert!(split_atoms("(9)").is_err());
/// ```
pub fn split_atoms(chunk: &str) -> ParseResult<Vec<&str>> {
    let delimiter = match (chunk.contains('('), chunk.contains(')')) {
        (true, true) => {
            return Err(ParseError::MixedDelimiters { chunk: chunk.to_string() });
        },
        (true, false) => '(',
        (false, true) => ')',
        (false, false) => {
            return Ok(if chunk.is_empty() { Vec::new() } else { vec![chunk] });
        },
    };

    let mut atoms = Vec::new();
    let mut rest = chunk;
    while let Some(at) = rest.find(delimiter) {
        if at > 0 {
            atoms.push(&rest[..at]);
        }
        atoms.push(&rest[at..=at]);
        rest = &rest[at + 1..];
    }
    if !rest.is_empty() {
        atoms.push(rest);
    }

    Ok(atoms)
}

/// Resolves a named constant to its value.
///
/// # Errors
/// Returns [`ParseError::NoPriorAnswer`] for `ans` when `last_answer` is
/// `None`.
pub fn resolve_constant(named: NamedConstant, last_answer: Option<f64>) -> ParseResult<f64> {
    let value = match named.constant.fixed_value() {
        Some(value) => value,
        None => last_answer.ok_or(ParseError::NoPriorAnswer)?,
    };

    Ok(if named.negated { -value } else { value })
}

/// Turns a raw line into a flat token sequence.
///
/// The line is split on single spaces, each chunk is split into atoms, every
/// atom is classified, and constants are replaced by number tokens carrying
/// the decimal text of their value. Parentheses must balance: no prefix of the
/// line may close more groups than it opened, and the whole line must close
/// every group it opens.
///
/// # Errors
/// Any [`ParseError`]: unknown atoms, mixed delimiters, unbalanced
/// parentheses, or `ans` without a previous answer.
///
/// # Example
/// ```
/// use tiercalc::interpreter::{
///     lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("2 * (ans - 1)", Some(4.0)).unwrap();
/// assert_eq!(tokens,
///            vec![Token::number(2),
///                 Token::Operator(Operator::Mul),
///                 Token::OpenGroup,
///                 Token::number(4),
///                 Token::Operator(Operator::Sub),
///                 Token::number(1),
///                 Token::CloseGroup]);
///
/// assert!(tokenize("(1 + 2", None).is_err());
/// ```
pub fn tokenize(line: &str, last_answer: Option<f64>) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for chunk in line.split(' ') {
        for atom in split_atoms(chunk)? {
            let token = match classify(atom)? {
                Atom::Number => Token::number(atom),
                Atom::Constant(named) => Token::number(resolve_constant(named, last_answer)?),
                Atom::Operator(op) => Token::Operator(op),
                Atom::OpenGroup => Token::OpenGroup,
                Atom::CloseGroup => Token::CloseGroup,
            };
            trace!("atom {atom:?} -> {token:?}");
            tokens.push(token);
        }
    }

    check_balance(&tokens)?;

    debug!("tokenized {line:?} into {} tokens", tokens.len());
    Ok(tokens)
}

/// Validates that every `)` closes an earlier `(` and every `(` is closed.
fn check_balance(tokens: &[Token]) -> ParseResult<()> {
    let mut depth = 0usize;

    for token in tokens {
        match token {
            Token::OpenGroup => depth += 1,
            Token::CloseGroup => {
                depth = depth.checked_sub(1)
                             .ok_or(ParseError::UnmatchedParen { surplus: Delimiter::Close })?;
            },
            _ => {},
        }
    }

    if depth > 0 {
        return Err(ParseError::UnmatchedParen { surplus: Delimiter::Open });
    }
    Ok(())
}
