//! Token model shared by the tokenizer, converter and evaluator

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::EvalError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Sub,
    /// `*`
    #[serde(rename = "*")]
    Mul,
    /// `/`
    #[serde(rename = "/")]
    Div,
}

impl Operator {
    /// Look up the operator for a source character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// The source symbol for this operator.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength. Higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Apply the operator as `left op right`.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                // Also catches -0.0
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical unit of an infix expression, or an element of a postfix sequence.
///
/// Postfix sequences only ever contain [`Token::Number`] and
/// [`Token::Operator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Whether this token may appear in a postfix sequence.
    pub fn is_postfix_item(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Operator(_))
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

// Numbers serialize as JSON numbers, everything else as its symbol.
// Non-finite numbers have no JSON form and are written as `"inf"`, `"NaN"`.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Token::Number(n) if !n.is_finite() => serializer.serialize_str(&n.to_string()),
            Token::Number(n) => serializer.serialize_f64(*n),
            Token::Operator(op) => op.serialize(serializer),
            Token::LeftParen => serializer.serialize_str("("),
            Token::RightParen => serializer.serialize_str(")"),
        }
    }
}

/// Render a token sequence as space-separated text, e.g. `3 4 5 * +`.
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    }

    #[test]
    fn test_from_char_round_trips_symbol() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn test_apply_operand_order() {
        assert_eq!(Operator::Sub.apply(10.0, 4.0), Ok(6.0));
        assert_eq!(Operator::Div.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_apply_division_by_zero() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Div.apply(1.0, -0.0), Err(EvalError::DivisionByZero));
        assert_eq!(Operator::Mul.apply(1.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_non_finite_numbers_serialize_as_strings() {
        let tokens = [Token::Number(f64::INFINITY), Token::Number(f64::NAN)];
        assert_eq!(serde_json::to_string(&tokens).unwrap(), r#"["inf","NaN"]"#);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Token::from(2.5), Token::Number(2.5));
        assert_eq!(Token::from(Operator::Div), Token::Operator(Operator::Div));
    }

    #[test]
    fn test_display() {
        let tokens = [
            Token::LeftParen,
            Token::Number(2.5),
            Token::Operator(Operator::Mul),
            Token::Number(4.0),
            Token::RightParen,
        ];
        assert_eq!(format_postfix(&tokens), "( 2.5 * 4 )");
        assert_eq!(format_postfix(&[]), "");
    }
}
