//! Contract violations on container cells.

use super::ValueKind;

/// A `push`, `pop`, or `take` that broke the container contract.
///
/// The evaluator only ever asks for cells it has just counted, so hitting one
/// of these means an internal invariant broke. It is still reported as a
/// checked failure rather than a panic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    /// The value is a leaf and has no cells.
    #[error("{kind} value has no cells")]
    NotAList { kind: ValueKind },
    /// The index is past the end of the container.
    #[error("cell index {index} out of range for {count} cells")]
    IndexOutOfRange { index: usize, count: usize },
}
