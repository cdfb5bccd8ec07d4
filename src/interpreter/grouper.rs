use log::debug;

use crate::interpreter::token::Token;

/// Nests every parenthesized span into a [`Token::Group`].
///
/// The sequence is scanned left to right. On `(` the matching `)` is found by
/// counting nesting depth, the span strictly between them is grouped
/// recursively, and the whole span is replaced by one group token. The closing
/// delimiter is dropped; everything outside groups keeps its order.
///
/// The input is expected to have passed the lexer's balance check. For
/// unbalanced input the function still terminates: a stray `)` is dropped and
/// an unclosed `(` swallows the rest of the sequence.
///
/// # Example
/// ```
/// use tiercalc::interpreter::{grouper::group, lexer::tokenize, token::Token};
///
/// let grouped = group(&tokenize("5 * (5 + ( 1 ))", None).unwrap());
///
/// assert_eq!(grouped.len(), 3);
/// let Token::Group(children) = &grouped[2] else { panic!("expected a group") };
/// assert_eq!(children.len(), 3);
/// assert_eq!(children[2], Token::Group(vec![Token::number(1)]));
/// ```
#[must_use]
pub fn group(tokens: &[Token]) -> Vec<Token> {
    let grouped = group_span(tokens);
    debug!("grouped {} tokens into {} top-level tokens", tokens.len(), grouped.len());
    grouped
}

fn group_span(tokens: &[Token]) -> Vec<Token> {
    let mut grouped = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        match &tokens[index] {
            Token::OpenGroup => {
                let start = index + 1;
                let end = matching_close(tokens, start).unwrap_or(tokens.len());
                grouped.push(Token::Group(group_span(&tokens[start..end])));
                index = end + 1;
            },
            Token::CloseGroup => index += 1,
            token => {
                grouped.push(token.clone());
                index += 1;
            },
        }
    }

    grouped
}

/// Index of the `)` closing a group whose contents start at `start`.
fn matching_close(tokens: &[Token], start: usize) -> Option<usize> {
    let mut depth = 1usize;

    for (offset, token) in tokens[start..].iter().enumerate() {
        match token {
            Token::OpenGroup => depth += 1,
            Token::CloseGroup => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            },
            _ => {},
        }
    }

    None
}
