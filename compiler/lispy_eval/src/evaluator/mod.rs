//! Reduction of value trees.

use lispy_ir::{CellError, Operator, Value};
use lispy_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::errors::{bad_head, cell_violation, unknown_operator};
use crate::operators::apply_operator;

/// Evaluate `value` to its result.
///
/// Numbers, errors, symbols, and Q-expressions are returned unchanged.
/// S-expressions are reduced:
///
/// 1. every cell is evaluated, left to right, before anything is checked
/// 2. the first error among the cells becomes the result
/// 3. `()` evaluates to itself
/// 4. `(x)` evaluates to `x`
/// 5. otherwise the head must be an operator symbol, applied to the rest
#[tracing::instrument(level = "trace", skip_all, fields(kind = %value.kind()))]
pub fn evaluate(value: Value) -> Value {
    ensure_sufficient_stack(|| {
        if !matches!(value, Value::SExpr(_)) {
            return value;
        }
        match value.into_cells() {
            Ok(cells) => eval_sexpr(cells),
            Err(error) => cell_violation(error),
        }
    })
}

fn eval_sexpr(cells: Vec<Value>) -> Value {
    let cells: Vec<Value> = cells.into_iter().map(evaluate).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        debug!(index, count = cells.len(), "error poisons s-expression");
        return settle(Value::sexpr_from(cells).take(index));
    }

    match cells.len() {
        0 => Value::sexpr_from(cells),
        1 => settle(Value::sexpr_from(cells).take(0)),
        _ => {
            let mut args = Value::sexpr_from(cells);
            let head = match args.pop(0) {
                Ok(head) => head,
                Err(error) => return cell_violation(error),
            };
            call(&head, args)
        }
    }
}

/// Dispatch on the head of an S-expression with at least one argument.
fn call(head: &Value, args: Value) -> Value {
    let Some(symbol) = head.as_symbol() else {
        trace!(head = %head.kind(), "head is not a symbol");
        return bad_head();
    };
    let Some(op) = Operator::from_symbol(symbol) else {
        debug!(symbol, "unknown operator");
        return unknown_operator(symbol);
    };
    apply_operator(args, op)
}

fn settle(result: Result<Value, CellError>) -> Value {
    result.unwrap_or_else(cell_violation)
}
