use crate::ast::Query;
use crate::error::{ErrorKind, ParseError, ParseResult, error};
use crate::lexer::{Lexer, Token, TokenKind};
use text_size::TextRange;

/// Delimiter tracking for better error messages
#[derive(Debug, Clone, Copy)]
pub(super) struct DelimiterInfo {
    pub(super) span: TextRange,
}

/// Recursive-descent parser over the token stream of one query.
pub struct Parser<'src> {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    pub(super) source: &'src str,
    pub(super) delimiter_stack: Vec<DelimiterInfo>,
    lexical_errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        let source = lexer.source();
        let (tokens, lexical_errors) = lexer.tokenize();

        Parser {
            tokens,
            current: 0,
            source,
            delimiter_stack: Vec::new(),
            lexical_errors,
        }
    }

    /// Parse the whole input as a single query.
    ///
    /// A lexical error anywhere in the input is reported before any syntax
    /// error, since the token stream is incomplete past that point.
    pub fn parse(&mut self) -> ParseResult<Query> {
        if let Some(first) = self.lexical_errors.first() {
            return Err(Box::new(first.clone()));
        }

        self.parse_query()
    }

    pub(super) fn peek(&self) -> Token {
        self.tokens
            .get(self.current)
            .copied()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, TextRange::default()))
    }

    pub(super) fn prev(&self) -> Token {
        self.tokens[self.current.saturating_sub(1)]
    }

    pub(super) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.prev()
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn consume(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Source text of a token.
    pub(super) fn text(&self, token: Token) -> &'src str {
        let start = usize::from(token.span.start());
        let end = usize::from(token.span.end());
        self.source.get(start..end).unwrap_or_default()
    }

    /// Build the error for the current token not being `expected`.
    pub(super) fn unexpected(&self, expected: &str) -> Box<ParseError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => error(
                ErrorKind::UnexpectedEof {
                    expected: expected.to_string(),
                },
                token.span,
            ),
            TokenKind::RightParen if self.delimiter_stack.is_empty() => {
                error(ErrorKind::UnmatchedClosing, token.span)
            }
            _ => error(
                ErrorKind::UnexpectedToken {
                    expected: Some(expected.to_string()),
                    found: self.text(token).to_string(),
                },
                token.span,
            ),
        }
    }

    pub(super) fn open_delimiter(&mut self) {
        let span = self.advance().span;
        self.delimiter_stack.push(DelimiterInfo { span });
    }

    pub(super) fn close_delimiter(&mut self) -> ParseResult<()> {
        match self.peek().kind {
            TokenKind::RightParen => {
                self.advance();
                self.delimiter_stack.pop();
                Ok(())
            }
            TokenKind::Eof => Err(self
                .check_unclosed_delimiters()
                .unwrap_or_else(|| self.unexpected("')'"))),
            _ => Err(self.unexpected("')'")),
        }
    }

    pub(super) fn check_unclosed_delimiters(&self) -> Option<Box<ParseError>> {
        self.delimiter_stack.last().map(|opening| {
            error(
                ErrorKind::UnclosedDelimiter {
                    opening_span: opening.span,
                },
                self.peek().span,
            )
        })
    }
}
