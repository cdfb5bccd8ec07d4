use std::fmt;

/// Reduction tier of a token.
///
/// Tiers are reduced in the order [`Priority::Unary`], [`Priority::Binary`],
/// [`Priority::Additive`]. [`Priority::Literal`] tokens are never reduced
/// themselves; they are only consumed as operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Tier X: numbers and groups.
    Literal,
    /// Tier A: powers, roots, factorials, trigonometry and `abs`.
    Unary,
    /// Tier B: multiplication, division, modulo, `nCr` and `nPr`.
    Binary,
    /// Tier C: addition, subtraction and logarithms.
    Additive,
}

impl Priority {
    /// The tiers that are actively reduced, in reduction order.
    pub const REDUCTION_ORDER: [Self; 3] = [Self::Unary, Self::Binary, Self::Additive];
}

/// Which neighbors an operator consumes as operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Consumes nothing.
    None,
    /// Consumes its predecessor (postfix).
    Left,
    /// Consumes its successor (prefix).
    Right,
    /// Consumes its predecessor and its successor (infix).
    LeftRight,
}

impl Arity {
    /// Whether the operator needs a predecessor.
    #[must_use]
    pub const fn takes_left(self) -> bool {
        matches!(self, Self::Left | Self::LeftRight)
    }

    /// Whether the operator needs a successor.
    #[must_use]
    pub const fn takes_right(self) -> bool {
        matches!(self, Self::Right | Self::LeftRight)
    }
}

/// Every operator and function the calculator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**`
    Pow,
    /// `//`, `a // b` is the `a`-th root of `b`.
    Root,
    /// `!`
    Factorial,
    /// `%`
    Modulo,
    /// `log`, `a log b` is the logarithm of `a` to base `b`.
    Log,
    /// `nCr`
    Combination,
    /// `nPr`
    Permutation,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `dsin`
    SinDeg,
    /// `dcos`
    CosDeg,
    /// `dtan`
    TanDeg,
    /// `abs`
    Abs,
}

impl Operator {
    /// The reduction tier of the operator.
    ///
    /// # Example
    /// ```
    /// use tiercalc::interpreter::token::{Operator, Priority};
    ///
    /// assert_eq!(Operator::Pow.priority(), Priority::Unary);
    /// assert_eq!(Operator::Combination.priority(), Priority::Binary);
    /// assert_eq!(Operator::Log.priority(), Priority::Additive);
    /// ```
    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            Self::Pow
            | Self::Root
            | Self::Factorial
            | Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::SinDeg
            | Self::CosDeg
            | Self::TanDeg
            | Self::Abs => Priority::Unary,
            Self::Mul | Self::Div | Self::Modulo | Self::Combination | Self::Permutation => {
                Priority::Binary
            },
            Self::Add | Self::Sub | Self::Log => Priority::Additive,
        }
    }

    /// Which neighbors the operator consumes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Factorial => Arity::Left,
            Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::SinDeg
            | Self::CosDeg
            | Self::TanDeg
            | Self::Abs => Arity::Right,
            _ => Arity::LeftRight,
        }
    }

    /// The spelling used in expressions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Root => "//",
            Self::Factorial => "!",
            Self::Modulo => "%",
            Self::Log => "log",
            Self::Combination => "nCr",
            Self::Permutation => "nPr",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::SinDeg => "dsin",
            Self::CosDeg => "dcos",
            Self::TanDeg => "dtan",
            Self::Abs => "abs",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Named constants. Each may be written with a leading `-` to negate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`
    Pi,
    /// `tau`, two pi.
    Tau,
    /// `e`, Euler's number.
    E,
    /// `g`, standard gravity in m/s².
    G,
    /// `phi`, the golden ratio.
    Phi,
    /// `c`, the speed of light in m/s.
    C,
    /// `ans`, the last successful answer.
    Ans,
}

/// Standard acceleration of gravity (<https://oeis.org/A072915>).
pub const STANDARD_GRAVITY: f64 = 9.806_65;
/// Speed of light in vacuum (<https://oeis.org/A003678>).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
/// The golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

impl Constant {
    /// The value of the constant, or `None` for [`Constant::Ans`] which
    /// depends on the session.
    #[must_use]
    pub const fn fixed_value(self) -> Option<f64> {
        match self {
            Self::Pi => Some(std::f64::consts::PI),
            Self::Tau => Some(std::f64::consts::TAU),
            Self::E => Some(std::f64::consts::E),
            Self::G => Some(STANDARD_GRAVITY),
            Self::Phi => Some(GOLDEN_RATIO),
            Self::C => Some(SPEED_OF_LIGHT),
            Self::Ans => None,
        }
    }
}

/// A named constant as it appeared in the input, possibly negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedConstant {
    /// Which constant.
    pub constant: Constant,
    /// Whether the atom carried a leading `-`.
    pub negated:  bool,
}

/// The unit of the intermediate representation.
///
/// The lexer produces flat sequences of `Number`, `Operator`, `OpenGroup` and
/// `CloseGroup`. The grouper replaces every matched `OpenGroup ... CloseGroup`
/// span with a single `Group` holding the span's contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, kept as the text it was written (or resolved) as.
    Number(String),
    /// An operator or function.
    Operator(Operator),
    /// `(` before grouping.
    OpenGroup,
    /// `)` before grouping.
    CloseGroup,
    /// A parenthesized span after grouping.
    Group(Vec<Token>),
}

impl Token {
    /// Reduction tier of the token. Everything but operators is tier X.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        match self {
            Self::Operator(op) => op.priority(),
            _ => Priority::Literal,
        }
    }

    /// Which neighbors the token consumes. Only operators consume anything.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Operator(op) => op.arity(),
            _ => Arity::None,
        }
    }

    /// Shorthand for building a number token from any displayable value.
    pub fn number(text: impl ToString) -> Self {
        Self::Number(text.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenGroup => f.write_str("("),
            Self::CloseGroup => f.write_str(")"),
            Self::Group(children) => {
                f.write_str("(")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(" )")
            },
        }
    }
}
