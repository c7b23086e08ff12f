//! Abstract Syntax Tree (AST) definition.

pub mod display;
pub mod expr;
pub mod nodes;
pub mod ops;

// Re-export commonly used types
pub use expr::*;
pub use nodes::*;
pub use ops::{ComparisonOp, LogicalOp};
