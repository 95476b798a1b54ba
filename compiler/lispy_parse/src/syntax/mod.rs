//! Tagged syntax tree.
//!
//! The reader only needs three things from a node: its tag, its literal text,
//! and its children. [`SyntaxNode`] captures exactly that, so trees from
//! another parser can be read as long as they follow the tag conventions in
//! [`tags`]. [`AstNode`] is the tree this crate's own parser builds.

use std::fmt;

use lispy_ir::Span;
use lispy_stack::ensure_sufficient_stack;

/// Tag strings attached by [`crate::parse`].
///
/// Tags are `|`-separated rule paths, innermost rule in the middle, so a
/// reader matches on substrings (`contains("number")`) rather than equality.
pub mod tags {
    /// Root of every parse.
    pub const ROOT: &str = ">";
    pub const NUMBER: &str = "expr|number|regex";
    pub const SYMBOL: &str = "expr|symbol|char";
    pub const SEXPR: &str = "expr|sexpr|>";
    pub const QEXPR: &str = "expr|qexpr|>";
    /// Delimiter tokens: `(`, `)`, `{`, `}`.
    pub const CHAR: &str = "char";
    /// Start and end-of-input anchors.
    pub const REGEX: &str = "regex";
}

/// Read-only view of a syntax tree node.
pub trait SyntaxNode: Sized {
    /// Rule path that produced this node.
    fn tag(&self) -> &str;

    /// Literal text; empty for composite nodes.
    fn contents(&self) -> &str;

    /// Children in source order.
    fn children(&self) -> &[Self];
}

/// Node of the tree built by [`crate::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AstNode {
    tag: &'static str,
    contents: String,
    span: Span,
    children: Vec<AstNode>,
}

impl AstNode {
    /// Node with literal text and no children.
    pub fn leaf(tag: &'static str, contents: impl Into<String>, span: Span) -> Self {
        AstNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Composite node with no literal text.
    pub fn branch(tag: &'static str, span: Span, children: Vec<AstNode>) -> Self {
        AstNode {
            tag,
            contents: String::new(),
            span,
            children,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
            if self.children.is_empty() {
                write!(f, " '{}'", self.contents)?;
            }
            writeln!(f)?;
            for child in &self.children {
                child.write_tree(f, depth + 1)?;
            }
            Ok(())
        })
    }
}

/// Dropping walks the tree with a worklist so deep input uses constant stack.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl SyntaxNode for AstNode {
    fn tag(&self) -> &str {
        self.tag
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Indented dump, one node per line: `tag` for composites,
/// `tag 'contents'` for leaves.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
