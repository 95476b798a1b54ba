//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use lispy_parse::{parse, read};
use tracing::debug;

use crate::reporting::render_parse_error;
use crate::{CliError, ReplConfig};

/// Printed when the interactive loop starts.
pub const BANNER: &str = "Lispy version 0.0.0.1\nPress Ctrl+c to Exit.\n";

/// Interactive loop over arbitrary streams.
pub struct Repl {
    config: ReplConfig,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        Self { config }
    }

    /// Prompt, read a line, answer it, until `input` runs dry.
    ///
    /// Results go to `out`; parse errors go to `err` and do not end the
    /// loop. Returns the number of lines answered.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> Result<usize, CliError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.config.banner {
            writeln!(out, "{BANNER}")?;
        }

        let mut answered = 0;
        let mut line = String::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let source = line.trim_end_matches(['\n', '\r']);
            if source.trim().is_empty() {
                continue;
            }

            respond(source, self.config.show_ast, out, err)?;
            answered += 1;
        }

        debug!(answered, "input closed");
        Ok(answered)
    }
}

/// Answer one line: the evaluated result on `out`, or a rendered parse
/// error on `err`. Returns whether the line parsed.
pub fn respond<W, E>(source: &str, show_ast: bool, out: &mut W, err: &mut E) -> io::Result<bool>
where
    W: Write,
    E: Write,
{
    let tree = match parse(source) {
        Ok(tree) => tree,
        Err(error) => {
            write!(err, "{}", render_parse_error(source, &error))?;
            return Ok(false);
        }
    };

    if show_ast {
        write!(out, "{tree}")?;
    }

    let result = lispy_eval::evaluate(read(&tree));
    writeln!(out, "{result}")?;
    Ok(true)
}
