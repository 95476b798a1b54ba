//! Error values produced during evaluation.
//!
//! Every failure the evaluator can hit has a variant here; the constructors
//! below turn one straight into an error [`Value`]. Keeping the messages in
//! one place keeps the printed output stable.

use lispy_ir::{CellError, Operator, Value};

/// Typed category of an evaluation failure.
///
/// The `Display` text is the message carried by the resulting error value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Division By Zero")]
    DivisionByZero,
    #[error("Cannot operator on non number!")]
    NonNumberOperand,
    #[error("S-expression Does not start with symbol")]
    BadHead,
    #[error("unknown operator '{symbol}'")]
    UnknownOperator { symbol: String },
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("operator '{op}' needs at least one argument")]
    MissingOperands { op: Operator },
    /// A cell access the evaluator itself got wrong.
    #[error("internal error: {0}")]
    Cell(#[from] CellError),
}

impl From<EvalErrorKind> for Value {
    fn from(kind: EvalErrorKind) -> Self {
        Value::error(kind.to_string())
    }
}

#[cold]
pub fn division_by_zero() -> Value {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn non_number_operand() -> Value {
    EvalErrorKind::NonNumberOperand.into()
}

#[cold]
pub fn bad_head() -> Value {
    EvalErrorKind::BadHead.into()
}

#[cold]
pub fn unknown_operator(symbol: &str) -> Value {
    EvalErrorKind::UnknownOperator {
        symbol: symbol.to_string(),
    }
    .into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> Value {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

#[cold]
pub fn missing_operands(op: Operator) -> Value {
    EvalErrorKind::MissingOperands { op }.into()
}

#[cold]
pub fn cell_violation(error: CellError) -> Value {
    EvalErrorKind::Cell(error).into()
}
