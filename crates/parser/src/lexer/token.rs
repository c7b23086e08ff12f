//! Token definition and types.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A positioned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Token { kind, span }
    }

    pub fn start(&self) -> TextSize {
        self.span.start()
    }

    pub fn end(&self) -> TextSize {
        self.span.end()
    }
}

/// Lexical token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Select,
    From,
    Where,
    And,
    Or,
    Not,
    Rsleep,
    Rspeed,
    Ident,
    QuotedIdent,
    Number,
    Equal,
    EqualEqual,
    NotEqual,
    LessGreater,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
    Eof,
}

impl TokenKind {
    /// Resolve a bare word to a keyword. Keywords are case-insensitive.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        const KEYWORDS: [(&str, TokenKind); 8] = [
            ("select", TokenKind::Select),
            ("from", TokenKind::From),
            ("where", TokenKind::Where),
            ("and", TokenKind::And),
            ("or", TokenKind::Or),
            ("not", TokenKind::Not),
            ("rsleep", TokenKind::Rsleep),
            ("rspeed", TokenKind::Rspeed),
        ];

        KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
    }

    /// Human readable description used in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Rsleep => "RSLEEP",
            TokenKind::Rspeed => "RSPEED",
            TokenKind::Ident | TokenKind::QuotedIdent => "identifier",
            TokenKind::Number => "number",
            TokenKind::Equal => "'='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::NotEqual => "'!='",
            TokenKind::LessGreater => "'<>'",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Eof => "end of query",
        }
    }
}

/// Logos-based lexer token enum.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum LogosToken {
    // Keywords are resolved from words afterwards so they stay case-insensitive
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"`[^`\n]*`")]
    QuotedIdent,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("<>")]
    LessGreater,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
}
