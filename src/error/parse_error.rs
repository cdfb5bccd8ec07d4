use std::fmt;

/// One of the two grouping delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("("),
            Self::Close => f.write_str(")"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while tokenizing a line.
pub enum ParseError {
    /// An atom matched no literal, constant, operator or function.
    #[error("Unknown token: {token}")]
    UnknownToken {
        /// The offending atom.
        token: String,
    },
    /// A single whitespace-delimited chunk held both `(` and `)`.
    #[error("One token may never contain both '(' and ')': {chunk}")]
    MixedDelimiters {
        /// The offending chunk.
        chunk: String,
    },
    /// The line holds more of one delimiter than the other.
    #[error("Unmatched '{surplus}': too many '{surplus}'")]
    UnmatchedParen {
        /// The delimiter that occurs too often.
        surplus: Delimiter,
    },
    /// `ans` was used before any calculation succeeded.
    #[error("Can't use `ans` without previous answer!")]
    NoPriorAnswer,
}
