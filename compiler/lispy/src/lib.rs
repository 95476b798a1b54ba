//! Lispy - read, evaluate, print.
//!
//! Library half of the `lispy` binary. [`eval_source`] is the whole pipeline
//! for one line of input; [`Repl`] drives it interactively over any pair of
//! streams; [`commands`] holds the entry points behind each CLI subcommand.

pub mod commands;
mod config;
mod error;
mod repl;
mod reporting;
mod tracing_setup;

use lispy_ir::Value;
use lispy_parse::{read_source, ParseError};

pub use config::ReplConfig;
pub use error::CliError;
pub use repl::{respond, Repl, BANNER};
pub use reporting::render_parse_error;
pub use tracing_setup::init_tracing;

/// Parse, read, and evaluate one line of source.
pub fn eval_source(source: &str) -> Result<Value, ParseError> {
    read_source(source).map(lispy_eval::evaluate)
}
