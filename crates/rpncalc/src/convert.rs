//! Infix to postfix conversion (shunting-yard)

use tracing::trace;

use crate::error::SyntaxError;
use crate::token::Token;

/// Convert an infix token sequence to postfix.
///
/// Equal-precedence operators pop each other, which makes every operator
/// left-associative. The returned sequence contains no parentheses.
///
/// # Errors
///
/// [`SyntaxError::UnbalancedParentheses`] if a `)` has no matching `(` on the
/// operator stack, or a `(` is never closed.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    trace!(%top, incoming = %op, "pop operator");
                    operators.pop();
                    output.push(top.into());
                }
                operators.push(token);
            }

            Token::LeftParen => operators.push(token),

            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(SyntaxError::UnbalancedParentheses),
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top == Token::LeftParen {
            return Err(SyntaxError::UnbalancedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::format_postfix;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn rpn(src: &str) -> String {
        format_postfix(&to_postfix(&tokenize(src)).expect("conversion failed"))
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("3 + 4"), "3 4 +");
        assert_eq!(rpn("3 + 4 * 5"), "3 4 5 * +");
        assert_eq!(rpn("3 * 4 + 5"), "3 4 * 5 +");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(rpn("(3 + 4) * 5"), "3 4 + 5 *");
        assert_eq!(rpn("((1))"), "1");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(rpn("10 - 4 - 3"), "10 4 - 3 -");
        assert_eq!(rpn("8 / 4 / 2"), "8 4 / 2 /");
        assert_eq!(rpn("8 / 4 * 2"), "8 4 / 2 *");
    }

    #[test]
    fn test_unmatched_right_paren() {
        assert_eq!(
            to_postfix(&tokenize("1 + 2)")),
            Err(SyntaxError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_unclosed_left_paren() {
        assert_eq!(
            to_postfix(&tokenize("(1 + 2")),
            Err(SyntaxError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_output_has_no_parentheses() {
        let postfix = to_postfix(&tokenize("((2 + 3) * (4 - 1)) / 5")).unwrap();
        assert!(postfix.iter().all(Token::is_postfix_item));
    }

    #[test]
    fn test_adjacent_operators_pass_through() {
        assert_eq!(rpn("2 + + 2"), "2 + 2 +");
    }
}
