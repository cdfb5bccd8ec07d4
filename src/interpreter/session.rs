use log::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate, grouper::group, lexer::tokenize},
};

/// State that outlives a single calculation.
///
/// A session remembers the result of the last successful calculation so the
/// next line can refer to it as `ans`. Failed calculations leave it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Session {
    last_answer: Option<f64>,
}

impl Session {
    /// Creates a session without a previous answer.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_answer: None }
    }

    /// The result of the last successful calculation, if any.
    #[must_use]
    pub const fn last_answer(&self) -> Option<f64> {
        self.last_answer
    }

    /// Tokenizes, groups and evaluates one line.
    ///
    /// On success the result becomes the new last answer.
    ///
    /// # Errors
    /// Any parse or runtime failure of the line. The last answer is kept.
    ///
    /// # Example
    /// ```
    /// use tiercalc::interpreter::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert!(session.evaluate_line("ans + 1").is_err());
    ///
    /// assert_eq!(session.evaluate_line("3 ! + 1").unwrap(), 7.0);
    /// assert!(session.evaluate_line("ans / 0").is_err());
    /// assert_eq!(session.evaluate_line("ans * 2").unwrap(), 14.0);
    /// assert_eq!(session.last_answer(), Some(14.0));
    /// ```
    pub fn evaluate_line(&mut self, line: &str) -> Result<f64, Error> {
        let tokens = tokenize(line, self.last_answer)?;
        let result = evaluate(&group(&tokens))?;

        debug!("{line:?} = {result}");
        self.last_answer = Some(result);
        Ok(result)
    }
}
