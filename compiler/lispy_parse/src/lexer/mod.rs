//! Tokenizer generated by `logos`.

use logos::Logos;
use lispy_ir::Span;
use tracing::trace;

use crate::ParseError;

/// Kind of a lexed token. The token's text is recovered from its span.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // `-5` is a number, `- 5` is a symbol followed by a number.
    #[regex(r"-?[0-9]+")]
    Number,
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Symbol,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

impl TokenKind {
    pub const fn is_close(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBrace)
    }
}

/// A token and where it sits in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The token's text within `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }

    /// First character of the token's text; delimiters and symbols are one
    /// character long.
    pub fn first_char(&self, source: &str) -> char {
        self.text(source).chars().next().unwrap_or('\0')
    }
}

/// Split `source` into tokens, skipping whitespace.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                let found = lexer.slice().chars().next().unwrap_or('\0');
                return Err(ParseError::UnexpectedChar { found, span });
            }
        }
    }

    trace!(count = tokens.len(), "lexed");
    Ok(tokens)
}
