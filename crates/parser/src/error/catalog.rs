//! Error metadata catalog.
//!
//! Maps every [`ErrorKind`] to its code, title and a generic
//! suggestion. Message formatting for a concrete error lives here as well.

use super::codes::ErrorCode;
use super::kinds::ErrorKind;

/// Metadata for each error kind.
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: ErrorCode,
    pub error_type: &'static str,
    pub title: &'static str,
    pub suggestion: Option<&'static str>,
}

impl ErrorKind {
    /// Get the metadata for this error kind.
    pub fn metadata(&self) -> ErrorMetadata {
        match self {
            ErrorKind::InvalidCharacter => ErrorMetadata {
                code: ErrorCode::E1001,
                error_type: "SyntaxError",
                title: "Invalid character in query",
                suggestion: Some("Queries only use identifiers, numbers, comparison operators, parentheses and commas"),
            },
            ErrorKind::InvalidNumber => ErrorMetadata {
                code: ErrorCode::E1003,
                error_type: "SyntaxError",
                title: "Number literal has invalid format",
                suggestion: Some("Valid examples: 42, 0.5, 1e3"),
            },
            ErrorKind::UnexpectedToken { .. } => ErrorMetadata {
                code: ErrorCode::E2001,
                error_type: "SyntaxError",
                title: "Unexpected token",
                suggestion: None,
            },
            ErrorKind::UnexpectedEof { .. } => ErrorMetadata {
                code: ErrorCode::E2003,
                error_type: "SyntaxError",
                title: "Unexpected end of query",
                suggestion: Some("The query is incomplete. Expected form: SELECT <pins> FROM <target> [WHERE ...] [RSLEEP n] [RSPEED n]"),
            },
            ErrorKind::UnclosedDelimiter { .. } => ErrorMetadata {
                code: ErrorCode::E2006,
                error_type: "SyntaxError",
                title: "Unclosed parenthesis",
                suggestion: Some("Add the missing ')'"),
            },
            ErrorKind::UnmatchedClosing => ErrorMetadata {
                code: ErrorCode::E2007,
                error_type: "SyntaxError",
                title: "Unmatched closing parenthesis",
                suggestion: Some("Remove the extra ')' or add the matching '('"),
            },
            ErrorKind::ExpectedCondition { .. } => ErrorMetadata {
                code: ErrorCode::E2009,
                error_type: "SyntaxError",
                title: "Expected a condition",
                suggestion: Some("Conditions compare two operands, e.g. din1 = 0 or ain2 > 512"),
            },
        }
    }

    /// Format the message for this specific error.
    pub fn format_message(&self) -> String {
        match self {
            ErrorKind::InvalidCharacter => "Invalid character in query".to_string(),
            ErrorKind::InvalidNumber => "Number literal has invalid format".to_string(),
            ErrorKind::UnexpectedToken { expected, found } => {
                if let Some(expected) = expected {
                    format!("Unexpected token '{}', expected {}", found, expected)
                } else {
                    format!("Unexpected token '{}'", found)
                }
            }
            ErrorKind::UnexpectedEof { expected } => {
                format!("Unexpected end of query, expected {}", expected)
            }
            ErrorKind::UnclosedDelimiter { .. } => "Unclosed delimiter, expected ')'".to_string(),
            ErrorKind::UnmatchedClosing => "Unmatched closing delimiter ')'".to_string(),
            ErrorKind::ExpectedCondition { found } => {
                format!("Expected a comparison or '(' but found '{}'", found)
            }
        }
    }
}
