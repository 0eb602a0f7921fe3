//! Character-level validation run before tokenization

use crate::error::SyntaxError;

/// Whether `ch` belongs to the expression alphabet.
fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit()
        || ch.is_whitespace()
        || matches!(ch, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Reject empty input, foreign characters and unbalanced parentheses.
///
/// Character legality is checked over the whole input before parenthesis
/// balance, so `"(2 $ 2"` reports the `$`.
pub fn validate(expression: &str) -> Result<(), SyntaxError> {
    if expression.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    if let Some(ch) = expression.chars().find(|&ch| !is_allowed(ch)) {
        return Err(SyntaxError::InvalidCharacter(ch));
    }

    let mut balance: usize = 0;
    for ch in expression.chars() {
        match ch {
            '(' => balance += 1,
            ')' => {
                balance = balance
                    .checked_sub(1)
                    .ok_or(SyntaxError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }

    if balance != 0 {
        return Err(SyntaxError::UnbalancedParentheses);
    }

    Ok(())
}
