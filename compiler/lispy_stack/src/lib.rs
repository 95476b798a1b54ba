//! Stack growth guard for deeply nested expressions.
//!
//! Parsing, reading, and evaluating an S-expression all recurse once per
//! nesting level, so an input such as `((((...))))` with tens of thousands of
//! parentheses would exhaust the native stack. Each recursive step wraps its
//! body in [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated stack segment whenever the remaining space drops below the red
//! zone.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
