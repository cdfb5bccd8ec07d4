use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{error::Error, interpreter::session::Session, util::num::format_number};

/// Printed by `--licence`, `licence`, and at the start of interactive mode.
pub const LICENCE: &str = "\
tiercalc  Copyright (C) 2025  the tiercalc contributors
This program comes with ABSOLUTELY NO WARRANTY.
This is free software, and you are welcome to redistribute it
under certain conditions; see the GNU Affero General Public Licence,
version 3 or later, for details.";

/// Printed by `help`.
pub const HELP: &str = "\
Write expressions with every number and operator separated by spaces:
    2 * (3 + 4) ! - 1
Parentheses may touch the number next to them, as in `(3` or `4)`.

Tiers, each reduced strictly left to right:
    A   **  //  !  sin  cos  tan  dsin  dcos  dtan  abs
    B   *  /  %  nCr  nPr
    C   +  -  log
`a // b` is the a-th root of b, `a log b` the logarithm of a to base b.

Constants: pi tau e g phi c ans (prefix `-` to negate)
Commands:  help, licence, exit";

/// Printed after the message of the one failure that always ends the process.
pub const ZERO_OVER_ZERO_TRAILER: &str = "Never gonna give you up!\nNever gonna let you down\n...";

/// What a line typed in interactive mode asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Leave the loop with success status.
    Exit,
    /// Show the help text.
    Help,
    /// Show the licence notice.
    Licence,
    /// Nothing to do.
    Blank,
    /// Evaluate the line.
    Calculate(&'a str),
}

impl<'a> Command<'a> {
    /// Recognizes meta-commands; anything else is an expression.
    ///
    /// # Example
    /// ```
    /// use tiercalc::driver::Command;
    ///
    /// assert_eq!(Command::parse(":q"), Command::Exit);
    /// assert_eq!(Command::parse(" help "), Command::Help);
    /// assert_eq!(Command::parse("1 + 1"), Command::Calculate("1 + 1"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":q" | "exit" | "exit()" | "quit" => Self::Exit,
            "help" => Self::Help,
            "licence" | "license" => Self::Licence,
            "" => Self::Blank,
            expression => Self::Calculate(expression),
        }
    }
}

/// Writes a failure message, followed by the trailer for fatal failures.
pub fn report_failure<W: Write>(err: &mut W, failure: &Error) -> io::Result<()> {
    writeln!(err, "{failure}")?;
    if failure.is_fatal() {
        writeln!(err, "{ZERO_OVER_ZERO_TRAILER}")?;
    }
    Ok(())
}

/// Evaluates a single expression and returns the process exit status.
///
/// The result goes to `out`; a failure goes to `err` and yields its
/// [`exit_code`](Error::exit_code).
///
/// # Errors
/// Only I/O errors from writing to `out` or `err`.
///
/// # Example
/// ```
/// use tiercalc::driver::run_once;
///
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// assert_eq!(run_once("1 / 2", &mut out, &mut err).unwrap(), 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "0.5\n");
///
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// assert_eq!(run_once("0 / 0", &mut out, &mut err).unwrap(), 69);
/// ```
pub fn run_once<O: Write, E: Write>(expression: &str, out: &mut O, err: &mut E) -> io::Result<i32> {
    match Session::new().evaluate_line(expression) {
        Ok(result) => {
            writeln!(out, "{}", format_number(result))?;
            Ok(0)
        },
        Err(failure) => {
            report_failure(err, &failure)?;
            Ok(failure.exit_code())
        },
    }
}

/// Runs the interactive loop until an exit command, end of input, or a fatal
/// failure, and returns the process exit status.
///
/// Each line is handled completely before the next one is read. Ordinary
/// failures are reported and the loop continues with the session unchanged.
///
/// # Errors
/// Only I/O errors from reading `input` or writing `out` or `err`.
///
/// # Example
/// ```
/// use tiercalc::{driver::run_interactive, interpreter::session::Session};
///
/// let input = "3 ! + 1\nans * 2\n1 / 0\nans\nexit\n";
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let mut session = Session::new();
///
/// let status = run_interactive(input.as_bytes(), &mut out, &mut err, &mut session).unwrap();
///
/// assert_eq!(status, 0);
/// assert_eq!(session.last_answer(), Some(14.0));
/// assert!(String::from_utf8(err).unwrap().contains("divide by 0"));
/// ```
pub fn run_interactive<R, O, E>(input: R,
                                out: &mut O,
                                err: &mut E,
                                session: &mut Session)
                                -> io::Result<i32>
    where R: BufRead,
          O: Write,
          E: Write
{
    writeln!(out, "{LICENCE}\n")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("end of input, leaving interactive mode");
            return Ok(0);
        };

        match Command::parse(&line) {
            Command::Exit => return Ok(0),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Licence => writeln!(out, "{LICENCE}")?,
            Command::Blank => {},
            Command::Calculate(expression) => match session.evaluate_line(expression) {
                Ok(result) => writeln!(out, "{}", format_number(result))?,
                Err(failure) => {
                    debug!("line {expression:?} failed: {failure:?}");
                    report_failure(err, &failure)?;
                    if failure.is_fatal() {
                        return Ok(failure.exit_code());
                    }
                },
            },
        }
    }
}
