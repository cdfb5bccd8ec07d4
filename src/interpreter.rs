/// Token vocabulary shared by every stage.
///
/// Declares the `Token` enum, the operators with their reduction tier and
/// arity, and the named constants.
pub mod token;
/// The classifier maps an isolated atom to its kind.
///
/// Built on a logos lexer: an atom is valid only if one rule matches it from
/// its first to its last character.
pub mod classifier;
/// The lexer module tokenizes a raw line.
///
/// # Responsibilities
/// - Splits the line on spaces and splits delimiters off each chunk.
/// - Classifies atoms and resolves named constants, `ans` included.
/// - Rejects lines whose parentheses do not balance.
pub mod lexer;
/// The grouper nests parenthesized spans.
///
/// Every matched `(` ... `)` pair becomes one group token holding its
/// recursively grouped contents.
pub mod grouper;
/// The evaluator module reduces a grouped token sequence to a number.
///
/// # Responsibilities
/// - Parses literals and evaluates groups recursively.
/// - Resolves factorials before anything else.
/// - Reduces the tiers A, B and C in order, strictly left to right.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// Calculation sessions.
///
/// Carries the last answer from one line to the next.
pub mod session;
