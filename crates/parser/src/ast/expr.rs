//! Condition expression nodes.

use super::ops::{ComparisonOp, LogicalOp};
use text_size::TextRange;

/// A WHERE condition or one of its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Comparison(ComparisonExpr),
    Logical(LogicalExpr),
    Negation(NegationExpr),
    Column(ColumnRef),
    Number(NumericLiteral),
}

impl Expr {
    pub fn span(&self) -> TextRange {
        match self {
            Expr::Comparison(e) => e.span,
            Expr::Logical(e) => e.span,
            Expr::Negation(e) => e.span,
            Expr::Column(e) => e.span,
            Expr::Number(e) => e.span,
        }
    }

    /// Leaves are the only nodes that can appear as comparison operands.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Column(_) | Expr::Number(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpr {
    pub op: ComparisonOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub op: LogicalOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NegationExpr {
    pub inner: Box<Expr>,
    pub span: TextRange,
}

/// A pin (column) name. `quoted` records backtick quoting in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub quoted: bool,
    pub span: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLiteral {
    pub value: Number,
    pub span: TextRange,
}

/// Numeric literal value.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Number::Int(i) => i > 0,
            Number::Float(f) => f > 0.0,
        }
    }

    pub fn negate(self) -> Number {
        match self {
            Number::Int(i) => Number::Int(i.wrapping_neg()),
            Number::Float(f) => Number::Float(-f),
        }
    }
}
