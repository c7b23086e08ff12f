//! Error kind definitions for lexical and syntax errors.

use text_size::TextRange;

/// Error kind enum covering everything the lexer and parser can reject.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// Invalid character in the query
    InvalidCharacter,

    /// Number literal has invalid format or does not fit
    InvalidNumber,

    /// Unexpected token encountered during parsing
    UnexpectedToken {
        expected: Option<String>,
        found: String,
    },

    /// Query ended while more input was required
    UnexpectedEof { expected: String },

    /// Opening parenthesis has no matching closing parenthesis
    UnclosedDelimiter { opening_span: TextRange },

    /// Closing parenthesis has no matching opening parenthesis
    UnmatchedClosing,

    /// A WHERE condition was required (comparison or parenthesised condition)
    ExpectedCondition { found: String },
}
