//! Operators.

use std::str::FromStr;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,    // =
    NotEq, // <> (also written !=)
    Lt,    // <
    LtE,   // <=
    Gt,    // >
    GtE,   // >=
}

impl FromStr for ComparisonOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(ComparisonOp::Eq),
            "<>" | "!=" => Ok(ComparisonOp::NotEq),
            "<" => Ok(ComparisonOp::Lt),
            "<=" => Ok(ComparisonOp::LtE),
            ">" => Ok(ComparisonOp::Gt),
            ">=" => Ok(ComparisonOp::GtE),
            _ => Err(()),
        }
    }
}

impl ComparisonOp {
    /// Canonical query spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::NotEq => "<>",
            ComparisonOp::Lt => "<",
            ComparisonOp::LtE => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::GtE => ">=",
        }
    }

    /// Spelling in generated target code.
    pub fn target_symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::NotEq => "!=",
            other => other.as_str(),
        }
    }
}

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Canonical query spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }

    /// Spelling in generated target code.
    pub fn target_symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bang_equal_normalizes_to_not_equal() {
        assert_eq!("!=".parse::<ComparisonOp>(), Ok(ComparisonOp::NotEq));
        assert_eq!(ComparisonOp::NotEq.as_str(), "<>");
    }

    #[test]
    fn target_mapping_is_exact() {
        let mapped: Vec<_> = [
            ComparisonOp::Eq,
            ComparisonOp::NotEq,
            ComparisonOp::Lt,
            ComparisonOp::LtE,
            ComparisonOp::Gt,
            ComparisonOp::GtE,
        ]
        .iter()
        .map(|op| (op.as_str(), op.target_symbol()))
        .collect();

        assert_eq!(
            mapped,
            vec![
                ("=", "=="),
                ("<>", "!="),
                ("<", "<"),
                ("<=", "<="),
                (">", ">"),
                (">=", ">="),
            ]
        );
        assert_eq!(LogicalOp::And.target_symbol(), "&&");
        assert_eq!(LogicalOp::Or.target_symbol(), "||");
    }
}
