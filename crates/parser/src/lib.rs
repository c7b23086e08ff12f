//! Rossoc: front end of the query-to-firmware compiler
//!
//! Turns a restricted SQL-like query into a validated intermediate
//! representation:
//! - Logos-based lexer with case-insensitive keywords
//! - Recursive-descent parser for `SELECT ... FROM ... [WHERE ...] [RSLEEP n] [RSPEED n]`
//! - Canonical serializer (`Display`) for queries and conditions
//! - Coded diagnostics with source context and suggestions
//! - Semantic analysis against the pin whitelist and a target vocabulary
//!
//! ```
//! use rossoc_parser::{Analyzer, parse_query};
//!
//! let query = parse_query("SELECT din1 FROM arduino WHERE din2 = 1 RSLEEP 0.5").unwrap();
//! let ir = Analyzer::default().analyze(&query).unwrap();
//!
//! assert_eq!(ir.condition.as_str(), "din2 == 1");
//! assert_eq!(ir.sleep.milliseconds, 500);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod semantic;

pub use ast::{Expr, Query};
pub use error::{Diagnostic, DiagnosticFormatter, ErrorConfig, ParseError, ParseResult};
pub use lexer::{Lexer, Token};
pub use parser::Parser;
pub use semantic::{Analyzer, Ir, SemanticError};

/// Parse query text into a [`Query`].
pub fn parse_query(source: &str) -> ParseResult<Query> {
    Parser::new(Lexer::new(source)).parse()
}
