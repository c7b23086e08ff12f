//! Statement-level nodes.

use super::expr::{ColumnRef, Expr, NumericLiteral};
use smallvec::SmallVec;
use text_size::TextRange;

/// `SELECT <columns> FROM <table> [WHERE <condition>] [RSLEEP n] [RSPEED n]`
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub columns: SmallVec<[ColumnRef; 4]>,
    pub table: TableRef,
    pub condition: Option<Expr>,
    pub rsleep: Option<NumericLiteral>,
    pub rspeed: Option<NumericLiteral>,
    pub span: TextRange,
}

/// The FROM target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: String,
    pub span: TextRange,
}
