//! Low-level cursor over the raw logos token stream.

use super::token::{LogosToken, Token, TokenKind};
use crate::error::{ErrorKind, ParseError, error};
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A cursor that converts logos tokens into positioned [`Token`]s.
pub struct Cursor<'src> {
    source: &'src str,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor { source }
    }

    /// Tokenize the whole input.
    /// Returns tokens and any lexical errors encountered.
    pub fn tokenize(&self) -> (Vec<Token>, Vec<ParseError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        let mut lexer = LogosToken::lexer(self.source);

        while let Some(tok_result) = lexer.next() {
            let range = lexer.span();
            let span = TextRange::new(
                TextSize::from(range.start as u32),
                TextSize::from(range.end as u32),
            );

            match tok_result {
                Ok(tok) => tokens.push(Token::new(self.convert_logos_token(tok, lexer.slice()), span)),
                Err(()) => errors.push(*error(ErrorKind::InvalidCharacter, span)),
            }
        }

        (tokens, errors)
    }

    /// Convert a LogosToken to TokenKind.
    fn convert_logos_token(&self, tok: LogosToken, text: &str) -> TokenKind {
        match tok {
            LogosToken::Word => TokenKind::keyword(text).unwrap_or(TokenKind::Ident),
            LogosToken::QuotedIdent => TokenKind::QuotedIdent,
            LogosToken::Number => TokenKind::Number,
            LogosToken::Equal => TokenKind::Equal,
            LogosToken::EqualEqual => TokenKind::EqualEqual,
            LogosToken::NotEqual => TokenKind::NotEqual,
            LogosToken::LessGreater => TokenKind::LessGreater,
            LogosToken::Less => TokenKind::Less,
            LogosToken::LessEqual => TokenKind::LessEqual,
            LogosToken::Greater => TokenKind::Greater,
            LogosToken::GreaterEqual => TokenKind::GreaterEqual,
            LogosToken::Plus => TokenKind::Plus,
            LogosToken::Minus => TokenKind::Minus,
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::Semicolon => TokenKind::Semicolon,
        }
    }
}
