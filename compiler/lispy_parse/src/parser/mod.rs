//! Recursive-descent parser producing an [`AstNode`] tree.
//!
//! Every delimiter is kept in the tree as a `char` leaf and the root is
//! bracketed by two `regex` anchors, matching the shape a combinator parser
//! would produce. The reader skips those bookkeeping nodes.

use lispy_ir::Span;
use lispy_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::lexer::{lex, Token, TokenKind};
use crate::syntax::{tags, AstNode};
use crate::ParseError;

/// Parse a whole line of input.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser {
        source,
        tokens: &tokens,
        pos: 0,
    };
    let tree = parser.parse_root()?;
    debug!(tokens = tokens.len(), "parsed");
    Ok(tree)
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn end_offset(&self) -> u32 {
        Span::from_range(0..self.source.len()).end
    }

    fn leaf(&self, tag: &'static str, token: Token) -> AstNode {
        AstNode::leaf(tag, token.text(self.source), token.span)
    }

    fn parse_root(&mut self) -> Result<AstNode, ParseError> {
        let end = self.end_offset();
        let mut children = vec![AstNode::leaf(tags::REGEX, "", Span::point(0))];

        while let Some(token) = self.advance() {
            children.push(self.parse_expr(token)?);
        }

        children.push(AstNode::leaf(tags::REGEX, "", Span::point(end)));
        Ok(AstNode::branch(tags::ROOT, Span::new(0, end), children))
    }

    /// Parse the expression starting at `token`, which has been consumed.
    fn parse_expr(&mut self, token: Token) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| match token.kind {
            TokenKind::Number => Ok(self.leaf(tags::NUMBER, token)),
            TokenKind::Symbol => Ok(self.leaf(tags::SYMBOL, token)),
            TokenKind::LParen => self.parse_list(token, TokenKind::RParen, tags::SEXPR),
            TokenKind::LBrace => self.parse_list(token, TokenKind::RBrace, tags::QEXPR),
            TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnmatchedClose {
                found: token.first_char(self.source),
                span: token.span,
            }),
        })
    }

    fn parse_list(
        &mut self,
        open: Token,
        close: TokenKind,
        tag: &'static str,
    ) -> Result<AstNode, ParseError> {
        let mut children = vec![self.leaf(tags::CHAR, open)];

        loop {
            let Some(token) = self.advance() else {
                return Err(ParseError::UnclosedDelimiter {
                    open: open.first_char(self.source),
                    span: open.span,
                });
            };

            if token.kind == close {
                children.push(self.leaf(tags::CHAR, token));
                return Ok(AstNode::branch(tag, open.span.merge(token.span), children));
            }

            if token.kind.is_close() {
                let expected = if close == TokenKind::RParen { ')' } else { '}' };
                return Err(ParseError::MismatchedClose {
                    expected,
                    found: token.first_char(self.source),
                    span: token.span,
                });
            }

            children.push(self.parse_expr(token)?);
        }
    }
}
