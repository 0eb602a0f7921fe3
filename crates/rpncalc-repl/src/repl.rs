//! Interactive read-evaluate-print loop

use std::io::{self, Write};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error, info, warn};

use crate::output::{is_quit, Outcome, OutputFormat, RenderOptions};

const BANNER: &str = "Calculator (type 'q' to quit)";

/// What the session does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// End the session
    Quit,
}

/// Greet the user. JSON output stays one object per line, so no banner there.
pub fn write_banner<W: Write>(options: &RenderOptions, out: &mut W) -> io::Result<()> {
    if options.format == OutputFormat::Text {
        writeln!(out, "{}", BANNER)?;
    }
    Ok(())
}

/// Handle one input line: the quit sentinel, or an expression to evaluate.
pub fn handle_line<W: Write>(
    line: &str,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<Flow> {
    if is_quit(line) {
        return Ok(Flow::Quit);
    }

    let outcome = Outcome::compute(line.trim());
    match outcome.render(options) {
        Ok(text) => writeln!(out, "{}", text)?,
        Err(e) => {
            error!("failed to render outcome: {:?}", e);
            writeln!(out, "Error: unexpected failure: {}", e)?;
        }
    }
    Ok(Flow::Continue)
}

/// Run a non-interactive session over `lines` until `q` or the source runs dry.
pub fn run_lines<I, S, W>(lines: I, options: &RenderOptions, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
    W: Write,
{
    write_banner(options, out)?;
    for line in lines {
        if handle_line(line?.as_ref(), options, out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run an interactive session until `q`, end of input, or a terminal failure.
pub fn run(prompt: &str, options: &RenderOptions) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to initialise line editor")?;
    let mut stdout = io::stdout();
    write_banner(options, &mut stdout).context("failed to write output")?;
    info!("session started");

    loop {
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                debug!("line abandoned");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        };

        let expression = line.trim();
        if !expression.is_empty() && !is_quit(expression) {
            if let Err(e) = editor.add_history_entry(expression) {
                warn!("failed to record history: {}", e);
            }
        }

        let flow = handle_line(&line, options, &mut stdout).context("failed to write output")?;
        if flow == Flow::Quit {
            break;
        }
    }

    info!("session ended");
    Ok(())
}
