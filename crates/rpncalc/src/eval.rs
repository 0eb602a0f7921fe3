//! Postfix evaluation

use tracing::trace;

use crate::error::{CalculatorError, SyntaxError};
use crate::token::Token;

/// Reduce a postfix sequence to a single value with an operand stack.
///
/// For each operator the right operand is popped first, then the left, and
/// `left op right` is pushed back.
///
/// # Errors
///
/// - [`SyntaxError::InsufficientOperands`] when an operator finds fewer than
///   two values on the stack.
/// - [`SyntaxError::MalformedExpression`] when the sequence contains a
///   parenthesis, or does not leave exactly one value behind.
/// - [`EvalError::DivisionByZero`](crate::EvalError::DivisionByZero) when the
///   right operand of `/` is zero.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, CalculatorError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => stack.push(value),

            Token::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(SyntaxError::InsufficientOperands.into());
                };
                let result = op.apply(left, right)?;
                trace!(left, %op, right, result, "apply");
                stack.push(result);
            }

            Token::LeftParen | Token::RightParen => {
                return Err(SyntaxError::MalformedExpression.into());
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(SyntaxError::MalformedExpression.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::token::Operator;

    fn num(n: f64) -> Token {
        Token::Number(n)
    }

    fn op(op: Operator) -> Token {
        Token::Operator(op)
    }

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate_postfix(&[num(42.0)]), Ok(42.0));
    }

    #[test]
    fn test_operand_order() {
        // 10 4 -  =>  10 - 4
        assert_eq!(
            evaluate_postfix(&[num(10.0), num(4.0), op(Operator::Sub)]),
            Ok(6.0)
        );
        assert_eq!(
            evaluate_postfix(&[num(1.0), num(4.0), op(Operator::Div)]),
            Ok(0.25)
        );
    }

    #[test]
    fn test_nested() {
        // 3 4 5 * +
        let postfix = [
            num(3.0),
            num(4.0),
            num(5.0),
            op(Operator::Mul),
            op(Operator::Add),
        ];
        assert_eq!(evaluate_postfix(&postfix), Ok(23.0));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(
            evaluate_postfix(&[]),
            Err(SyntaxError::MalformedExpression.into())
        );
    }

    #[test]
    fn test_leftover_operands() {
        assert_eq!(
            evaluate_postfix(&[num(1.0), num(2.0)]),
            Err(SyntaxError::MalformedExpression.into())
        );
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(
            evaluate_postfix(&[op(Operator::Add)]),
            Err(SyntaxError::InsufficientOperands.into())
        );
        assert_eq!(
            evaluate_postfix(&[num(1.0), op(Operator::Mul)]),
            Err(SyntaxError::InsufficientOperands.into())
        );
    }

    #[test]
    fn test_parenthesis_in_postfix() {
        assert_eq!(
            evaluate_postfix(&[num(1.0), Token::LeftParen]),
            Err(SyntaxError::MalformedExpression.into())
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate_postfix(&[num(10.0), num(0.0), op(Operator::Div)]),
            Err(EvalError::DivisionByZero.into())
        );
    }
}
