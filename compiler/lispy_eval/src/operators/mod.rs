//! The arithmetic builtin.
//!
//! Operands are validated as a whole before any arithmetic happens, then
//! folded left to right. All arithmetic is checked; the first failing step
//! ends the fold and its error value becomes the result.

use lispy_ir::{Operator, Value};
use tracing::trace;

use crate::errors::{
    cell_violation, division_by_zero, integer_overflow, missing_operands, non_number_operand,
};

/// Apply `op` to the cells of `args`, consuming it.
///
/// - any non-number cell: `Cannot operator on non number!`
/// - `-` with a single operand: negation
/// - `/` by zero: `Division By Zero`, remaining operands are never folded
/// - overflow at any step: `integer overflow in <operation>`
pub fn apply_operator(args: Value, op: Operator) -> Value {
    let cells = match args.into_cells() {
        Ok(cells) => cells,
        Err(error) => return cell_violation(error),
    };

    let Some(numbers) = cells
        .iter()
        .map(Value::as_number)
        .collect::<Option<Vec<i64>>>()
    else {
        return non_number_operand();
    };

    let Some((&first, rest)) = numbers.split_first() else {
        return missing_operands(op);
    };

    trace!(%op, operands = numbers.len(), "folding");

    let result = if op == Operator::Sub && rest.is_empty() {
        checked_neg(first)
    } else {
        rest.iter()
            .try_fold(first, |acc, &operand| apply_checked(op, acc, operand))
    };

    result.map_or_else(|error| error, Value::number)
}

/// One fold step. A failed step yields the error value that ends the fold.
#[inline]
fn apply_checked(op: Operator, lhs: i64, rhs: i64) -> Result<i64, Value> {
    match op {
        Operator::Add => checked_arith(lhs.checked_add(rhs), op),
        Operator::Sub => checked_arith(lhs.checked_sub(rhs), op),
        Operator::Mul => checked_arith(lhs.checked_mul(rhs), op),
        Operator::Div => checked_div(rhs == 0, || lhs.checked_div(rhs), op),
    }
}

#[inline]
fn checked_arith(result: Option<i64>, op: Operator) -> Result<i64, Value> {
    result.ok_or_else(|| integer_overflow(op.operation_name()))
}

/// Zero guard first, then overflow (`i64::MIN / -1`).
#[inline]
fn checked_div<F>(is_zero: bool, op_fn: F, op: Operator) -> Result<i64, Value>
where
    F: FnOnce() -> Option<i64>,
{
    if is_zero {
        Err(division_by_zero())
    } else {
        checked_arith(op_fn(), op)
    }
}

#[inline]
fn checked_neg(n: i64) -> Result<i64, Value> {
    n.checked_neg().ok_or_else(|| integer_overflow("negation"))
}
