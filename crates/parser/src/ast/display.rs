//! Canonical text form of queries and conditions.
//!
//! Identifiers are always backtick-quoted, `!=` prints as `<>`, and every
//! `AND`/`OR` node is wrapped in parentheses so the printed text carries the
//! tree's grouping regardless of how the source was formatted.

use super::expr::*;
use super::nodes::{Query, TableRef};
use std::fmt;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Debug keeps the fraction on whole floats (100.0, not 100)
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.name)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.name)
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(c) => c.fmt(f),
            Expr::Number(n) => n.fmt(f),
            Expr::Comparison(c) => write!(f, "{} {} {}", c.left, c.op.as_str(), c.right),
            Expr::Logical(l) => write!(f, "({} {} {})", l.left, l.op.as_str(), l.right),
            Expr::Negation(n) => match n.inner.as_ref() {
                inner @ Expr::Logical(_) => write!(f, "NOT {}", inner),
                inner => write!(f, "NOT ({})", inner),
            },
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", column)?;
        }
        write!(f, " FROM {}", self.table)?;

        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        if let Some(rsleep) = &self.rsleep {
            write!(f, " RSLEEP {}", rsleep)?;
        }
        if let Some(rspeed) = &self.rspeed {
            write!(f, " RSPEED {}", rspeed)?;
        }
        Ok(())
    }
}
