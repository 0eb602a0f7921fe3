//! Evaluating one input line and rendering the outcome

use std::fmt::Write as _;

use rpncalc::{evaluate_postfix, format_postfix, to_postfix, CalculatorError, Token};
use serde::{Serialize, Serializer};

/// How outcomes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Result: 4` / `Error: ...`
    Text,
    /// One JSON object per line
    Json,
}

/// Rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,
    /// Include the postfix form in text output
    pub show_rpn: bool,
}

/// Everything known about one evaluated expression.
#[derive(Debug, Serialize)]
pub struct Outcome<'a> {
    expression: &'a str,
    postfix: Option<Vec<Token>>,
    #[serde(serialize_with = "serialize_result")]
    result: Option<f64>,
    error: Option<String>,
}

impl<'a> Outcome<'a> {
    /// Convert and evaluate `expression`, keeping the intermediate postfix.
    pub fn compute(expression: &'a str) -> Self {
        let mut outcome = Outcome {
            expression,
            postfix: None,
            result: None,
            error: None,
        };

        let postfix = match to_postfix(expression) {
            Ok(postfix) => postfix,
            Err(e) => {
                outcome.error = Some(CalculatorError::from(e).to_string());
                return outcome;
            }
        };

        match evaluate_postfix(&postfix) {
            Ok(value) => outcome.result = Some(value),
            Err(e) => outcome.error = Some(e.to_string()),
        }
        outcome.postfix = Some(postfix);
        outcome
    }

    /// Whether evaluation failed.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Render for display.
    pub fn render(&self, options: &RenderOptions) -> Result<String, serde_json::Error> {
        match options.format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(self.render_text(options.show_rpn)),
        }
    }

    fn render_text(&self, show_rpn: bool) -> String {
        let mut out = String::new();
        if show_rpn {
            if let Some(postfix) = &self.postfix {
                let _ = writeln!(out, "RPN: {}", format_postfix(postfix));
            }
        }
        match (&self.result, &self.error) {
            (_, Some(error)) => {
                let _ = write!(out, "Error: {}", error);
            }
            (Some(value), None) => {
                let _ = write!(out, "Result: {}", value);
            }
            (None, None) => {}
        }
        out
    }
}

// JSON has no `inf` or `NaN`; write them as strings so a result is never `null`.
fn serialize_result<S: Serializer>(
    result: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match result {
        Some(value) if !value.is_finite() => serializer.serialize_str(&value.to_string()),
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}

/// Whether a line asks to end the session.
pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}
