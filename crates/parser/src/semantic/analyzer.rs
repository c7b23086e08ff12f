//! Query validation and IR construction.

use super::error::{SemanticError, SemanticResult};
use super::ir::{Condition, Ir, SleepSpec, SpeedSpec};
use super::pins::{PinUsage, is_known_pin, partition};
use super::translate::translate;
use crate::ast::{ColumnRef, Expr, Query, TableRef};

/// Targets accepted when no explicit vocabulary is given.
pub const BUILTIN_TARGETS: [&str; 4] = ["arduino", "board", "dev", "mruby"];

/// Validates a parsed query against the pin whitelist and a target
/// vocabulary, then builds the [`Ir`].
///
/// Checks run in a fixed order (columns, target, condition, RSLEEP, RSPEED)
/// and the first failure is returned.
#[derive(Debug, Clone)]
pub struct Analyzer {
    targets: Vec<String>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(BUILTIN_TARGETS)
    }
}

impl Analyzer {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets: Vec<String> = targets.into_iter().map(Into::into).collect();
        targets.sort();
        targets.dedup();
        Analyzer { targets }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn analyze(&self, query: &Query) -> SemanticResult<Ir> {
        let mut usage = PinUsage::default();

        self.check_columns(&query.columns, &mut usage)?;
        let target = self.check_target(&query.table)?;

        let condition = match &query.condition {
            Some(expr) => {
                check_condition(expr, &mut usage)?;
                Condition::Test(translate(expr)?)
            }
            None => Condition::AlwaysTrue,
        };

        let sleep = query
            .rsleep
            .map(|literal| SleepSpec::new(literal.value))
            .unwrap_or_default();
        let speed = query
            .rspeed
            .map(|literal| SpeedSpec {
                baud: literal.value,
            })
            .unwrap_or_default();

        let classified = partition(&usage)?;

        tracing::debug!(
            target_name = %target,
            referenced = usage.referenced.len(),
            outputs = usage.outputs.len(),
            condition = %condition,
            "analyzed query"
        );

        Ok(Ir {
            pins: usage,
            digital_in: classified.digital_in,
            analog_in: classified.analog_in,
            digital_out: classified.digital_out,
            analog_out: classified.analog_out,
            condition,
            sleep,
            speed,
            target,
        })
    }

    fn check_columns(&self, columns: &[ColumnRef], usage: &mut PinUsage) -> SemanticResult<()> {
        for column in columns {
            check_pin(column)?;
            usage.add_output(&column.name);
        }
        Ok(())
    }

    fn check_target(&self, table: &TableRef) -> SemanticResult<String> {
        if self.targets.iter().any(|target| *target == table.name) {
            Ok(table.name.clone())
        } else {
            Err(SemanticError::UnknownTarget {
                name: table.name.clone(),
                span: table.span,
                known: self.targets.clone(),
            })
        }
    }
}

fn check_pin(column: &ColumnRef) -> SemanticResult<()> {
    if is_known_pin(&column.name) {
        Ok(())
    } else {
        Err(SemanticError::UnknownColumn {
            name: column.name.clone(),
            span: column.span,
        })
    }
}

fn unsupported(expr: &Expr) -> SemanticError {
    SemanticError::UnsupportedExpression {
        expr: expr.to_string(),
        span: expr.span(),
    }
}

/// Walk a condition, recording every pin it names as an input.
///
/// Comparisons must compare two leaves and logical nodes must join two
/// conditions; anything else fails closed.
fn check_condition(expr: &Expr, usage: &mut PinUsage) -> SemanticResult<()> {
    match expr {
        Expr::Comparison(cmp) => {
            if !cmp.left.is_leaf() || !cmp.right.is_leaf() {
                return Err(unsupported(expr));
            }
            check_operand(&cmp.left, usage)?;
            check_operand(&cmp.right, usage)
        }
        Expr::Logical(logical) => {
            check_condition(&logical.left, usage)?;
            check_condition(&logical.right, usage)
        }
        // NOT only wraps nodes with two operands
        Expr::Negation(negation) => match negation.inner.as_ref() {
            inner @ (Expr::Comparison(_) | Expr::Logical(_)) => check_condition(inner, usage),
            inner => Err(unsupported(inner)),
        },
        Expr::Column(_) | Expr::Number(_) => Err(unsupported(expr)),
    }
}

fn check_operand(expr: &Expr, usage: &mut PinUsage) -> SemanticResult<()> {
    match expr {
        Expr::Column(column) => {
            check_pin(column)?;
            usage.add_input(&column.name);
            Ok(())
        }
        Expr::Number(_) => Ok(()),
        _ => Err(unsupported(expr)),
    }
}
