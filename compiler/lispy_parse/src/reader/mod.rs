//! Lowering a syntax tree into a value tree.
//!
//! Pure and total: every tree reads to some [`Value`]. The only failure is a
//! number literal outside the `i64` range, which reads to an error value.

use lispy_ir::Value;
use lispy_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::syntax::{tags, SyntaxNode};

/// Message of the error value produced for an unreadable number literal.
pub const INVALID_NUMBER: &str = "invalid number";

/// Read `node` and everything below it.
///
/// Rules, in order:
/// 1. a tag containing `number` reads as a base-10 integer
/// 2. a tag containing `symbol` reads as a symbol, text kept verbatim
/// 3. anything else is a list: a Q-expression if the tag contains `qexpr`,
///    otherwise an S-expression (this covers the root). Children are read
///    in order, skipping delimiter tokens and `regex` anchors.
pub fn read<N: SyntaxNode>(node: &N) -> Value {
    ensure_sufficient_stack(|| {
        let tag = node.tag();

        if tag.contains("number") {
            return read_number(node.contents());
        }
        if tag.contains("symbol") {
            return Value::symbol(node.contents());
        }

        let cells: Vec<Value> = node
            .children()
            .iter()
            .filter(|child| !is_bookkeeping(*child))
            .map(read)
            .collect();

        if tag.contains("qexpr") {
            Value::qexpr_from(cells)
        } else {
            Value::sexpr_from(cells)
        }
    })
}

fn read_number(text: &str) -> Value {
    text.parse::<i64>().map_or_else(
        |_| {
            trace!(text, "number literal out of range");
            Value::error(INVALID_NUMBER)
        },
        Value::number,
    )
}

/// Delimiters and anchors carry no meaning once the tree is built.
fn is_bookkeeping<N: SyntaxNode>(node: &N) -> bool {
    matches!(node.contents(), "(" | ")" | "{" | "}") || node.tag() == tags::REGEX
}
