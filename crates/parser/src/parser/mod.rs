//! Recursive-descent parser producing a [`Query`](crate::ast::Query).

mod expr;
mod stmt;
mod types;

pub use types::Parser;
