//! Semantic error types

use super::pins::pin_names;
use crate::error::{Diagnostic, ErrorCode, ErrorContext, closest_match};
use text_size::TextRange;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("Unknown column '{name}'")]
    UnknownColumn { name: String, span: TextRange },

    #[error("Unknown target '{name}'")]
    UnknownTarget {
        name: String,
        span: TextRange,
        known: Vec<String>,
    },

    #[error("Unsupported expression: {expr}")]
    UnsupportedExpression { expr: String, span: TextRange },
}

pub type SemanticResult<T> = Result<T, SemanticError>;

impl SemanticError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticError::UnknownColumn { .. } => ErrorCode::E3001,
            SemanticError::UnknownTarget { .. } => ErrorCode::E3002,
            SemanticError::UnsupportedExpression { .. } => ErrorCode::E3003,
        }
    }

    pub fn span(&self) -> TextRange {
        match self {
            SemanticError::UnknownColumn { span, .. }
            | SemanticError::UnknownTarget { span, .. }
            | SemanticError::UnsupportedExpression { span, .. } => *span,
        }
    }

    /// Convert this error to a diagnostic pointing into `source`.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let suggestion = match self {
            SemanticError::UnknownColumn { name, .. } => Some(
                closest_match(name, pin_names())
                    .map(|pin| format!("Did you mean '{}'?", pin))
                    .unwrap_or_else(|| "Pins are named din0..din20 and ain0..ain20".to_string()),
            ),
            SemanticError::UnknownTarget { name, known, .. } => Some(
                closest_match(name, known.iter().map(String::as_str))
                    .map(|target| format!("Did you mean '{}'?", target))
                    .unwrap_or_else(|| format!("Known targets: {}", known.join(", "))),
            ),
            SemanticError::UnsupportedExpression { .. } => {
                Some("NOT may only wrap a comparison or a parenthesised condition".to_string())
            }
        };

        let mut diagnostic = Diagnostic::new(self.to_string())
            .with_code(self.code())
            .with_error_type("SemanticError".to_string())
            .with_context(ErrorContext::new(source.to_string(), self.span()));

        if let Some(suggestion) = suggestion {
            diagnostic = diagnostic.with_suggestion(suggestion);
        }

        diagnostic
    }
}
