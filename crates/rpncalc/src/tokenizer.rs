//! Splitting expression text into tokens

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::trace;

use crate::token::{Operator, Token};

/// Split `expression` into tokens in source order.
///
/// Whitespace is dropped. A number is a run of ASCII digits, optionally
/// followed by `.` and more digits; `5.` reads as `5`. Characters that start
/// no token are skipped, so this never fails. Callers that need strict input
/// run [`validate`](crate::validate) first.
///
/// Malformed literals are not rejected here: `1.2.3` yields `1.2` and `3`.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = compact.char_indices().peekable();
    let mut tokens = Vec::new();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_ascii_digit() {
            let literal = &compact[start..scan_number(&mut chars, compact.len())];
            match literal.parse::<f64>() {
                Ok(value) => tokens.push(value.into()),
                // Unreachable for `\d+(\.\d*)?`, which is always valid `f64` syntax
                Err(e) => trace!(literal, %e, "literal dropped"),
            }
            continue;
        }

        chars.next();
        match ch {
            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),
            _ => match Operator::from_char(ch) {
                Some(op) => tokens.push(op.into()),
                None => trace!(skipped = %ch, "character starts no token"),
            },
        }
    }

    tokens
}

/// Consume `\d+(\.\d*)?` and return the byte offset just past it.
fn scan_number(chars: &mut Peekable<CharIndices<'_>>, len: usize) -> usize {
    let is_digit = |&(_, c): &(usize, char)| c.is_ascii_digit();

    while chars.next_if(is_digit).is_some() {}
    if chars.next_if(|&(_, c)| c == '.').is_some() {
        while chars.next_if(is_digit).is_some() {}
    }

    chars.peek().map_or(len, |&(offset, _)| offset)
}
