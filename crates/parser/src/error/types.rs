//! Error type for lexical and syntax errors.

use super::codes::ErrorCode;
use super::context::ErrorContext;
use super::diagnostic::Diagnostic;
use super::kinds::ErrorKind;
use super::suggestions::TypoSuggester;
use text_size::TextRange;

/// A syntax error: what went wrong and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: TextRange,
}

impl Error {
    /// Create a new error with the given kind and span.
    pub fn new(kind: ErrorKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// Convert this error to a diagnostic for display.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let metadata = self.kind.metadata();

        let primary_span = match &self.kind {
            ErrorKind::UnclosedDelimiter { opening_span } => *opening_span,
            _ => self.span,
        };

        let mut diagnostic = Diagnostic::new(self.kind.format_message())
            .with_code(metadata.code)
            .with_error_type(metadata.error_type.to_string())
            .with_title(metadata.title.to_string())
            .with_context(ErrorContext::new(source.to_string(), primary_span));

        let offending = source
            .get(usize::from(self.span.start())..usize::from(self.span.end()))
            .unwrap_or_default();
        let suggester = TypoSuggester::new();
        let suggestion = suggester
            .suggest_keyword(offending)
            .or_else(|| suggester.suggest_operator(offending))
            .or(metadata.suggestion);

        if let Some(suggestion) = suggestion {
            diagnostic = diagnostic.with_suggestion(suggestion.to_string());
        }

        diagnostic
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        self.kind.metadata().code
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (at offset {})",
            self.code(),
            self.kind.format_message(),
            u32::from(self.span.start())
        )
    }
}

impl std::error::Error for Error {}

/// Creates a new boxed error with the given kind and span.
/// Returns a boxed error to keep Result types small.
#[inline]
pub fn error(kind: ErrorKind, span: TextRange) -> Box<Error> {
    Box::new(Error::new(kind, span))
}
