/// Parsing errors.
///
/// Defines every failure that can occur while turning a raw line into tokens:
/// unknown atoms, mixed delimiters in one chunk, unbalanced parentheses, and
/// referring to `ans` before any answer exists.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every failure raised while reducing a token tree to a number,
/// including the numeric domain checks of the individual operators and the
/// deliberate `0 / 0` outcome.
pub mod runtime_error;

pub use parse_error::{Delimiter, ParseError};
pub use runtime_error::RuntimeError;

/// Exit status for every ordinary parse or evaluation failure.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status reserved for dividing zero by zero.
pub const EXIT_ZERO_OVER_ZERO: i32 = 69;

/// Any failure produced by the calculation pipeline.
///
/// Callers decide what a failure means for the process: the single-shot
/// driver exits with [`Error::exit_code`], the interactive loop reports it and
/// keeps going unless [`Error::is_fatal`] says otherwise.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The token tree could not be reduced to a single number.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns `true` for outcomes that end the process in every mode.
    ///
    /// # Example
    /// ```
    /// use tiercalc::error::{Error, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::ZeroOverZero);
    /// assert!(err.is_fatal());
    ///
    /// let err = Error::from(RuntimeError::DivisionByZero { dividend: 1.0 });
    /// assert!(!err.is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::ZeroOverZero))
    }

    /// The process exit status a single-shot run should end with.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_fatal() { EXIT_ZERO_OVER_ZERO } else { EXIT_FAILURE }
    }
}
