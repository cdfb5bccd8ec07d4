//! # tiercalc
//!
//! tiercalc evaluates arithmetic expressions written as space-delimited
//! strings. Instead of a precedence-climbing parser it reduces an expression
//! in fixed tiers: factorials first, then tier A (powers, roots, functions),
//! tier B (products, quotients, modulo, combinatorics) and tier C (sums,
//! differences, logarithms), each strictly left to right. Parenthesized groups
//! are evaluated independently and recursively.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{error::Error, interpreter::session::Session};

/// Single-shot and interactive drivers.
///
/// This module sits between the command line and the interpreter: it
/// recognizes interactive meta-commands, prints results and failures, and
/// turns failures into process exit statuses. The interpreter itself never
/// prints or exits.
pub mod driver;
/// Provides unified error types for tokenizing and evaluating.
///
/// This module defines every failure the pipeline can report, with the
/// operands involved so messages can be shown as-is, and maps failures to
/// exit statuses.
pub mod error;
/// Orchestrates the calculation pipeline.
///
/// # Responsibilities
/// - Classifies atoms and tokenizes raw lines.
/// - Nests parenthesized spans into groups.
/// - Reduces groups tier by tier to a single number.
/// - Keeps the last answer between lines.
pub mod interpreter;
/// Numeric primitives used by the evaluator.
pub mod util;

/// Evaluates one expression in a fresh session.
///
/// # Errors
/// Any parse or runtime failure of the expression; `ans` is always undefined
/// here.
///
/// # Examples
/// ```
/// use tiercalc::calculate;
///
/// assert_eq!(calculate("1 + 1 - 2").unwrap(), 0.0);
/// assert_eq!(calculate("8 log 10").unwrap(), 0.9030899869919434);
/// assert!(calculate("5 % 2.5").is_err());
/// ```
pub fn calculate(expression: &str) -> Result<f64, Error> {
    Session::new().evaluate_line(expression)
}
