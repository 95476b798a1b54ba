//! Values of the Lispy language.
//!
//! A [`Value`] is a number, an error, a symbol, or one of the two list
//! flavours: an S-expression, which the evaluator reduces, and a
//! Q-expression, which it leaves alone.
//!
//! # Constructors
//!
//! ```text
//! let n = Value::number(42);
//! let e = Value::error("Division By Zero");
//! let call = Value::sexpr_from(vec![Value::symbol("+"), Value::number(1), Value::number(2)]);
//! ```
//!
//! # Cell access
//!
//! [`Value::push`] appends a cell, [`Value::pop`] removes one and keeps the
//! container, [`Value::take`] removes one and consumes the container. All
//! three fail with [`CellError`] instead of panicking when used on a leaf or
//! with an index past the end.

mod cell_error;
mod error_value;

use std::fmt;

use lispy_stack::ensure_sufficient_stack;

pub use cell_error::CellError;
pub use error_value::ErrorValue;

/// Runtime value of the Lispy language.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Signed 64-bit integer.
    Number(i64),
    /// Evaluation failure.
    Error(ErrorValue),
    /// Operator name, kept verbatim from the source.
    Symbol(String),
    /// Evaluable list.
    SExpr(Vec<Value>),
    /// Quoted list; never reduced.
    QExpr(Vec<Value>),
}

/// Discriminant of a [`Value`], for messages and dispatch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Number,
    Error,
    Symbol,
    SExpr,
    QExpr,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Error => "error",
            ValueKind::Symbol => "symbol",
            ValueKind::SExpr => "s-expression",
            ValueKind::QExpr => "q-expression",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Constructors

impl Value {
    #[inline]
    pub const fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Create an error value; the message is copied into owned storage.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(ErrorValue::new(message))
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Empty S-expression.
    #[inline]
    pub const fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Empty Q-expression.
    #[inline]
    pub const fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    #[inline]
    pub fn sexpr_from(cells: Vec<Value>) -> Self {
        Value::SExpr(cells)
    }

    #[inline]
    pub fn qexpr_from(cells: Vec<Value>) -> Self {
        Value::QExpr(cells)
    }
}

impl From<ErrorValue> for Value {
    fn from(error: ErrorValue) -> Self {
        Value::Error(error)
    }
}

// Inspection

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::QExpr(_) => ValueKind::QExpr,
        }
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// The cells of a list value, or `None` for a leaf.
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Number of cells; zero for leaves.
    pub fn cell_count(&self) -> usize {
        self.cells().map_or(0, <[Value]>::len)
    }
}

// Cell access

impl Value {
    fn cells_mut(&mut self) -> Result<&mut Vec<Value>, CellError> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Ok(cells),
            leaf => Err(CellError::NotAList { kind: leaf.kind() }),
        }
    }

    /// Append `cell` after the existing cells, taking ownership of it.
    pub fn push(&mut self, cell: Value) -> Result<(), CellError> {
        self.cells_mut()?.push(cell);
        Ok(())
    }

    /// Remove the cell at `index`, shifting later cells down by one.
    ///
    /// The container keeps its remaining cells.
    pub fn pop(&mut self, index: usize) -> Result<Value, CellError> {
        let cells = self.cells_mut()?;
        if index >= cells.len() {
            return Err(CellError::IndexOutOfRange {
                index,
                count: cells.len(),
            });
        }
        Ok(cells.remove(index))
    }

    /// Remove the cell at `index` and drop the rest of the container.
    pub fn take(mut self, index: usize) -> Result<Value, CellError> {
        self.pop(index)
    }

    /// Consume a list value, returning its cells in order.
    pub fn into_cells(mut self) -> Result<Vec<Value>, CellError> {
        self.cells_mut().map(std::mem::take)
    }
}

// Destruction

/// Unlinks nested lists onto a worklist so that dropping a deep tree uses
/// constant stack. Lists whose cells are all leaves drop normally.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = match self {
            Value::SExpr(cells) | Value::QExpr(cells)
                if cells.iter().any(|cell| cell.cell_count() > 0) =>
            {
                std::mem::take(cells)
            }
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            if let Value::SExpr(cells) | Value::QExpr(cells) = &mut value {
                pending.append(cells);
            }
        }
    }
}

// Printing

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(error) => write!(f, "Error: {}", error.message()),
            Value::Symbol(name) => f.write_str(name),
            Value::SExpr(cells) => write_cells(f, cells, '(', ')'),
            Value::QExpr(cells) => write_cells(f, cells, '{', '}'),
        })
    }
}

#[cfg(test)]
mod tests;
