//! Command-line configuration

use clap::Parser;
use tracing::Level;

use crate::output::{OutputFormat, RenderOptions};

/// Evaluate infix arithmetic through Reverse Polish Notation.
///
/// Without `--expr`, starts an interactive session. Type `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "rpncalc", version, about, long_about = None)]
pub struct Cli {
    /// Evaluate a single expression and exit
    #[arg(short, long, value_name = "EXPR")]
    pub expr: Option<String>,

    /// Also print the postfix form of each expression
    #[arg(long)]
    pub show_rpn: bool,

    /// Print one JSON object per expression instead of text
    #[arg(long)]
    pub json: bool,

    /// Input prompt for the interactive session
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Log to stderr: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maximum log level selected by `-v` flags.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Rendering settings for evaluation results.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            show_rpn: self.show_rpn,
        }
    }
}
