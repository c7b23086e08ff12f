//! Codegen error types

use rossoc_parser::error::{Diagnostic, ErrorCode};
use rossoc_parser::{ParseError, SemanticError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Unknown target '{0}'")]
    UnknownTarget(String),

    #[error("No output file")]
    NoOutputPath,

    #[error("Output file already exists: {}", .0.display())]
    FileExists(PathBuf),

    #[error("No content")]
    NoContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BackendError::UnknownTarget(_) => ErrorCode::E4001,
            BackendError::NoOutputPath => ErrorCode::E4002,
            BackendError::FileExists(_) => ErrorCode::E4003,
            BackendError::NoContent => ErrorCode::E4004,
            BackendError::Io(_) => ErrorCode::E4005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::new(self.to_string())
            .with_code(self.code())
            .with_error_type("BackendError".to_string());

        match self {
            BackendError::NoOutputPath => {
                diagnostic.with_suggestion("Pass an output path with -o <file>".to_string())
            }
            BackendError::FileExists(_) => {
                diagnostic.with_suggestion("Use --force to replace the existing file".to_string())
            }
            _ => diagnostic,
        }
    }
}

/// Any failure along parse, analyze, generate.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("{0}")]
    Syntax(Box<ParseError>),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<Box<ParseError>> for CompileError {
    fn from(error: Box<ParseError>) -> Self {
        CompileError::Syntax(error)
    }
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Syntax(e) => e.code(),
            CompileError::Semantic(e) => e.code(),
            CompileError::Backend(e) => e.code(),
        }
    }

    /// Diagnostic for display; `source` is the query text.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        match self {
            CompileError::Syntax(e) => e.to_diagnostic(source),
            CompileError::Semantic(e) => e.to_diagnostic(source),
            CompileError::Backend(e) => e.to_diagnostic(),
        }
    }
}
