/// Numeric primitives shared by the evaluator.
///
/// This module holds the pure functions behind the calculator's operators
/// that are more than a single float operation: factorials, permutations and
/// combinations, degree conversion, parity checks on floats, and the textual
/// rendering of results.
pub mod num;
