#![deny(clippy::arithmetic_side_effects)]
//! Lispy Eval - reduces value trees to results.
//!
//! # Architecture
//!
//! - [`evaluate`]: the reduction rules. Only S-expressions reduce; every
//!   other value, Q-expressions included, evaluates to itself.
//! - [`apply_operator`]: the arithmetic builtin, folded left to right with
//!   checked `i64` arithmetic.
//! - [`errors`]: the error values the evaluator can produce.
//!
//! Evaluation is total. Anything that goes wrong becomes an error value and
//! travels back up through the ordinary return path.

pub mod errors;
mod evaluator;
mod operators;

pub use errors::EvalErrorKind;
pub use evaluator::evaluate;
pub use operators::apply_operator;
