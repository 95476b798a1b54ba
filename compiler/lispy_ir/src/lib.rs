//! Lispy IR - the value tree shared by the reader and the evaluator.
//!
//! This crate contains:
//! - [`Value`]: the closed tagged union of numbers, errors, symbols,
//!   S-expressions, and Q-expressions
//! - [`ErrorValue`]: the payload of an error value
//! - [`Operator`]: the four builtin arithmetic operators
//! - [`Span`]: byte ranges into source text
//!
//! # Ownership
//!
//! A container value owns its cells outright. Nothing is shared and nothing
//! is reference counted, so a tree is dropped exactly once. Dropping and
//! printing both stay within a bounded native stack however deep the tree.
//! Removing a cell (`pop`, `take`) moves it out of the tree.

mod operator;
mod span;
mod value;

pub use operator::Operator;
pub use span::Span;
pub use value::{CellError, ErrorValue, Value, ValueKind};
