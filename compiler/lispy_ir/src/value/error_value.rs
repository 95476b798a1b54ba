//! Payload of an error value.

use std::fmt;

/// A human-readable evaluation failure, carried as an ordinary value.
///
/// Error values poison the expression that contains them: the evaluator
/// returns the first one it finds among an S-expression's evaluated cells in
/// place of the whole expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Prints the bare message; `Value`'s printer adds the `Error: ` prefix.
impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
