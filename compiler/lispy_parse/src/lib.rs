//! Lispy Parse - from source text to a value tree.
//!
//! Three stages, each usable on its own:
//!
//! 1. [`lex`]: `logos`-generated tokenizer.
//! 2. [`parse`]: builds a tagged syntax tree ([`AstNode`]) whose tags follow
//!    the `expr|number|regex` convention of combinator-style parsers.
//! 3. [`read`]: lowers any tree implementing [`SyntaxNode`] into a
//!    [`lispy_ir::Value`].
//!
//! The grammar:
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : '+' | '-' | '*' | '/' ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! lispy  : /^/ <expr>* /$/ ;
//! ```

mod error;
mod lexer;
mod parser;
mod reader;
mod syntax;

use lispy_ir::Value;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::parse;
pub use reader::{read, INVALID_NUMBER};
pub use syntax::{tags, AstNode, SyntaxNode};

/// Parse `source` and read the resulting tree.
///
/// The top level is always an S-expression holding every expression on the
/// line, so `+ 1 2` and `(+ 1 2)` both read to something that evaluates to 3.
pub fn read_source(source: &str) -> Result<Value, ParseError> {
    parse(source).map(|tree| read(&tree))
}
