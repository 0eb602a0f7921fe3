//! `rpncalc`: interactive front end for the rpncalc evaluator

mod cli;
mod output;
mod repl;

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::output::Outcome;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!(version = rpncalc::VERSION, "starting");
    let options = cli.render_options();

    match &cli.expr {
        Some(expr) => {
            let outcome = Outcome::compute(expr.trim());
            println!("{}", outcome.render(&options)?);
            Ok(if outcome.is_err() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        None if !io::stdin().is_terminal() => {
            let stdin = io::stdin();
            repl::run_lines(stdin.lock().lines(), &options, &mut io::stdout().lock())
                .context("failed to process piped input")?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            repl::run(&cli.prompt, &options)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
