//! Error types for rpncalc evaluation

use thiserror::Error;

/// Structural problems with the input, detected before or during parsing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// The input string was empty
    #[error("empty expression")]
    EmptyExpression,

    /// A character outside the expression alphabet
    #[error("invalid character: '{0}'")]
    InvalidCharacter(char),

    /// A `)` without a matching `(`, or an unclosed `(`
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// An operator was reached with fewer than two operands on the stack
    #[error("not enough operands for operator")]
    InsufficientOperands,

    /// The postfix sequence did not reduce to exactly one value
    #[error("malformed expression")]
    MalformedExpression,
}

/// Arithmetic failures on otherwise well-formed input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Right-hand operand of `/` was zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Any failure of the top-level [`evaluate`](crate::evaluate) call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// Malformed input
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Arithmetic error
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl CalculatorError {
    /// Whether this error came from malformed input.
    pub fn is_syntax(&self) -> bool {
        matches!(self, CalculatorError::Syntax(_))
    }

    /// Whether this error came from arithmetic on well-formed input.
    pub fn is_eval(&self) -> bool {
        matches!(self, CalculatorError::Eval(_))
    }
}

/// Result type alias for rpncalc operations
pub type Result<T> = std::result::Result<T, CalculatorError>;
