//! Rendering parse errors for the terminal.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use lispy_parse::ParseError;

/// Render `error` against the line it came from, without color.
pub fn render_parse_error(source: &str, error: &ParseError) -> String {
    let span = error.span().to_range();
    let mut rendered = Vec::new();

    let written = Report::<Range<usize>>::build(ReportKind::Error, (), span.start)
        .with_config(Config::default().with_color(false))
        .with_message(error.to_string())
        .with_label(Label::new(span).with_message(error.label()))
        .finish()
        .write(Source::from(source), &mut rendered);

    match written {
        Ok(()) => String::from_utf8_lossy(&rendered).into_owned(),
        // Fall back to the bare message if the report cannot be laid out.
        Err(_) => format!("Error: {error}\n"),
    }
}
