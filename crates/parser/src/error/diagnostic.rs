//! Diagnostic reports shared by every error layer.

use super::codes::ErrorCode;
use super::context::ErrorContext;

/// A renderable report for a syntax, semantic or backend error.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Error code
    pub code: Option<ErrorCode>,
    /// Error type name (e.g., "SyntaxError", "SemanticError")
    pub error_type: Option<String>,
    /// Error title (short description)
    pub title: Option<String>,
    /// Primary error message
    pub message: String,
    /// Suggestion for fixing the error
    pub suggestion: Option<String>,
    /// Source location, when the error points into the query
    pub context: Option<ErrorContext>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(message: String) -> Self {
        Diagnostic {
            code: None,
            error_type: None,
            title: None,
            message,
            suggestion: None,
            context: None,
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the error type name.
    pub fn with_error_type(mut self, error_type: String) -> Self {
        self.error_type = Some(error_type);
        self
    }

    /// Set the error title.
    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Set the error context.
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }
}
