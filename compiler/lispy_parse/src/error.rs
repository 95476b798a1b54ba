//! Parse errors.

use lispy_ir::Span;

/// Why a line of source could not be turned into a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("unexpected character '{found}'")]
    UnexpectedChar { found: char, span: Span },
    /// An opening delimiter that is never closed.
    #[error("unclosed '{open}'")]
    UnclosedDelimiter { open: char, span: Span },
    /// A closing delimiter with nothing open.
    #[error("unmatched '{found}'")]
    UnmatchedClose { found: char, span: Span },
    /// A closing delimiter of the wrong shape, as in `(+ 1 2}`.
    #[error("expected '{expected}' but found '{found}'")]
    MismatchedClose {
        expected: char,
        found: char,
        span: Span,
    },
}

impl ParseError {
    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnclosedDelimiter { span, .. }
            | ParseError::UnmatchedClose { span, .. }
            | ParseError::MismatchedClose { span, .. } => *span,
        }
    }

    /// Short label to attach to the span when rendering.
    pub fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedChar { .. } => "not part of any token",
            ParseError::UnclosedDelimiter { .. } => "opened here",
            ParseError::UnmatchedClose { .. } => "nothing to close",
            ParseError::MismatchedClose { .. } => "wrong closing delimiter",
        }
    }
}
