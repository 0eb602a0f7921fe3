//! # rpncalc
//!
//! An arithmetic expression evaluator built on Reverse Polish Notation.
//!
//! Infix input such as `(5 + 3) * 2` is validated, split into tokens,
//! converted to postfix with the shunting-yard algorithm and reduced to a
//! single `f64` with an operand stack.
//!
//! ## Architecture
//!
//! ```text
//! &str → [validate] → [tokenize] → [convert] → postfix → [eval] → f64
//! ```
//!
//! - **Validator**: rejects empty input, foreign characters and unbalanced
//!   parentheses
//! - **Tokenizer**: numbers, `+ - * /` and parentheses
//! - **Converter**: infix to postfix with `*`/`/` binding tighter than `+`/`-`
//! - **Evaluator**: operand stack, exactly one value must remain
//!
//! Every call owns its working stacks, so all functions here are safe to call
//! from any number of threads at once.
//!
//! ## Example
//!
//! ```
//! assert_eq!(rpncalc::evaluate("(5 + 3) * (10 - 4) / 2"), Ok(24.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod eval;
pub mod token;
pub mod tokenizer;
pub mod validate;

use tracing::debug;

// Re-export main types
pub use error::{CalculatorError, EvalError, Result, SyntaxError};
pub use eval::evaluate_postfix;
pub use token::{format_postfix, Operator, Token};
pub use tokenizer::tokenize;
pub use validate::validate;

/// rpncalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate, tokenize and convert an infix expression to postfix.
///
/// ```
/// use rpncalc::format_postfix;
///
/// let postfix = rpncalc::to_postfix("3 + 4 * 5").unwrap();
/// assert_eq!(format_postfix(&postfix), "3 4 5 * +");
/// ```
pub fn to_postfix(expression: &str) -> std::result::Result<Vec<Token>, SyntaxError> {
    validate(expression)?;
    let tokens = tokenize(expression);
    debug!(count = tokens.len(), "tokenized");
    let postfix = convert::to_postfix(&tokens)?;
    debug!(postfix = %format_postfix(&postfix), "converted");
    Ok(postfix)
}

/// Evaluate an infix arithmetic expression.
///
/// Fails with the first error met, either a [`SyntaxError`] for malformed
/// input or an [`EvalError`] for arithmetic on well-formed input.
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix = to_postfix(expression)?;
    let value = evaluate_postfix(&postfix)?;
    debug!(expression, value, "evaluated");
    Ok(value)
}
