//! Entry points behind each subcommand of the `lispy` binary.
//!
//! Each returns the process exit code; the stream-generic halves are public
//! so they can be driven from tests.

use std::io::{self, Write};
use std::process::ExitCode;

use lispy_parse::parse;
use tracing::debug;

use crate::reporting::render_parse_error;
use crate::{respond, CliError, Repl, ReplConfig};

/// Interactive loop on stdin/stdout.
pub fn repl(config: ReplConfig) -> ExitCode {
    let stdin = io::stdin();
    let mut out = io::stdout();
    let mut err = io::stderr();
    report(Repl::new(config).run(stdin.lock(), &mut out, &mut err).map(|_| true))
}

/// Evaluate a single expression given on the command line.
pub fn eval_expr(source: &str, show_ast: bool) -> ExitCode {
    let mut out = io::stdout();
    let mut err = io::stderr();
    report(respond(source, show_ast, &mut out, &mut err).map_err(CliError::from))
}

/// Evaluate every non-blank line of the file at `path`.
pub fn run_file(path: &str) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            return report(Err(CliError::ReadFile {
                path: path.to_string(),
                source: error,
            }));
        }
    };
    let mut out = io::stdout();
    let mut err = io::stderr();
    report(run_lines(&source, &mut out, &mut err))
}

/// Answer each non-blank line of `source` in turn. Lines after a parse
/// error are still answered; the result is `false` if any line failed.
pub fn run_lines<W: Write, E: Write>(source: &str, out: &mut W, err: &mut E) -> Result<bool, CliError> {
    let mut all_parsed = true;
    for (number, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !respond(line, false, out, err)? {
            debug!(line = number + 1, "line failed to parse");
            all_parsed = false;
        }
    }
    Ok(all_parsed)
}

/// Print the syntax tree of `source` without evaluating it.
pub fn parse_expr(source: &str) -> ExitCode {
    let mut out = io::stdout();
    let mut err = io::stderr();
    report(write_tree(source, &mut out, &mut err))
}

/// Write the syntax tree of `source` to `out`, or its parse error to `err`.
pub fn write_tree<W: Write, E: Write>(source: &str, out: &mut W, err: &mut E) -> Result<bool, CliError> {
    match parse(source) {
        Ok(tree) => {
            write!(out, "{tree}")?;
            Ok(true)
        }
        Err(error) => {
            write!(err, "{}", render_parse_error(source, &error))?;
            Ok(false)
        }
    }
}

fn report(outcome: Result<bool, CliError>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
