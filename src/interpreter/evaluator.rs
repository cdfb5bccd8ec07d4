/// Core evaluation logic.
///
/// Contains the evaluation entry point, the value resolution pass, the
/// factorial pre-pass and the tier-by-tier reduction.
pub mod core;

/// Operator semantics.
///
/// Applies a single operator to its operands, including the numeric domain
/// checks of roots, division, modulo and logarithms.
pub mod operator;
