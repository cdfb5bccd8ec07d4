use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::ParseResult,
        token::{Arity, Constant, NamedConstant, Operator, Priority},
    },
};

/// The kind of an isolated atom.
///
/// An atom is one whitespace-delimited piece of input after delimiters have
/// been split off. It is valid only if a single variant matches it entirely.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Atom {
    /// Signed integer or decimal literal, such as `42`, `-3` or `6.1`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    /// Named constant, optionally negated, such as `pi` or `-ans`.
    #[regex(r"-?pi", |lex| named(lex, Constant::Pi))]
    #[regex(r"-?tau", |lex| named(lex, Constant::Tau))]
    #[regex(r"-?e", |lex| named(lex, Constant::E))]
    #[regex(r"-?g", |lex| named(lex, Constant::G))]
    #[regex(r"-?phi", |lex| named(lex, Constant::Phi))]
    #[regex(r"-?c", |lex| named(lex, Constant::C))]
    #[regex(r"-?ans", |lex| named(lex, Constant::Ans))]
    Constant(NamedConstant),
    /// Operator or function.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Modulo)]
    #[token("**", |_| Operator::Pow)]
    #[token("//", |_| Operator::Root)]
    #[token("!", |_| Operator::Factorial)]
    #[token("log", |_| Operator::Log)]
    #[token("nCr", |_| Operator::Combination)]
    #[token("nPr", |_| Operator::Permutation)]
    #[token("sin", |_| Operator::Sin)]
    #[token("cos", |_| Operator::Cos)]
    #[token("tan", |_| Operator::Tan)]
    #[token("dsin", |_| Operator::SinDeg)]
    #[token("dcos", |_| Operator::CosDeg)]
    #[token("dtan", |_| Operator::TanDeg)]
    #[token("abs", |_| Operator::Abs)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    OpenGroup,
    /// `)`
    #[token(")")]
    CloseGroup,
}

/// Builds the payload of a constant atom from the matched slice.
fn named(lex: &logos::Lexer<Atom>, constant: Constant) -> NamedConstant {
    NamedConstant { constant,
                    negated: lex.slice().starts_with('-') }
}

impl Atom {
    /// Reduction tier of the atom.
    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            Self::Operator(op) => op.priority(),
            _ => Priority::Literal,
        }
    }

    /// Which neighbors the atom consumes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Operator(op) => op.arity(),
            _ => Arity::None,
        }
    }
}

/// Maps an isolated atom to its kind.
///
/// The atom must be matched in full by exactly one rule; `3.5.1`, `--2` or
/// `sine` are rejected rather than split.
///
/// # Errors
/// Returns [`ParseError::UnknownToken`] if no rule covers the whole atom.
///
/// # Example
/// ```
/// use tiercalc::interpreter::{
///     classifier::{Atom, classify},
///     token::{Arity, Operator, Priority},
/// };
///
/// assert_eq!(classify("3.5").unwrap(), Atom::Number);
///
/// let root = classify("//").unwrap();
/// assert_eq!(root, Atom::Operator(Operator::Root));
/// assert_eq!(root.priority(), Priority::Unary);
/// assert_eq!(root.arity(), Arity::LeftRight);
///
/// assert!(classify("sine").is_err());
/// ```
pub fn classify(atom: &str) -> ParseResult<Atom> {
    let mut lexer = Atom::lexer(atom);
    let first = lexer.next();
    let covers_atom = lexer.span() == (0..atom.len());

    match first {
        Some(Ok(kind)) if covers_atom => Ok(kind),
        _ => Err(ParseError::UnknownToken { token: atom.to_string() }),
    }
}
