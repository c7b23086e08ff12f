//! Main lexer implementation for query text.

use super::cursor::Cursor;
use super::token::{Token, TokenKind};
use crate::error::ParseError;
use text_size::{TextRange, TextSize};

/// Lexer that tokenizes a query.
///
/// The token stream always ends with a single [`TokenKind::Eof`] token
/// positioned at the end of the input.
pub struct Lexer<'src> {
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source.
    pub fn new(input: &'src str) -> Self {
        Lexer { input }
    }

    /// Get the source text.
    pub fn source(&self) -> &'src str {
        self.input
    }

    /// Tokenize the entire input.
    /// Returns tokens and the lexical errors encountered.
    pub fn tokenize(&self) -> (Vec<Token>, Vec<ParseError>) {
        let (mut tokens, errors) = Cursor::new(self.input).tokenize();

        let eof_pos = TextSize::from(self.input.len() as u32);
        tokens.push(Token::new(TokenKind::Eof, TextRange::empty(eof_pos)));

        tracing::trace!(tokens = tokens.len(), errors = errors.len(), "tokenized query");
        (tokens, errors)
    }
}
