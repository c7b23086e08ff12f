//! Centralized error handling for the query compiler.
//!
//! Syntax errors are represented by [`ParseError`]. Semantic and backend
//! errors have their own types but render through the same [`Diagnostic`]
//! and [`DiagnosticFormatter`] so the command line shows them uniformly.

pub mod catalog;
pub mod codes;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod formatter;
pub mod kinds;
pub mod suggestions;
pub mod types;

pub use catalog::ErrorMetadata;
pub use codes::ErrorCode;
pub use config::ErrorConfig;
pub use context::ErrorContext;
pub use diagnostic::Diagnostic;
pub use formatter::DiagnosticFormatter;
pub use kinds::ErrorKind;
pub use suggestions::{TypoSuggester, closest_match};
pub use types::{Error as ParseError, error};

pub type ParseResult<T> = Result<T, Box<ParseError>>;
