//! Structural translation of a validated condition into target syntax.

use super::error::{SemanticError, SemanticResult};
use crate::ast::Expr;

/// Emit `expr` as a C-style boolean expression.
///
/// `=` becomes `==`, `<>` becomes `!=`, `AND`/`OR` become `&&`/`||` and
/// `NOT` becomes `!`. Identifiers are emitted bare and every logical node is
/// parenthesised.
pub fn translate(expr: &Expr) -> SemanticResult<String> {
    let mut out = String::new();
    emit(expr, &mut out)?;
    Ok(out)
}

fn emit(expr: &Expr, out: &mut String) -> SemanticResult<()> {
    match expr {
        Expr::Column(column) => out.push_str(&column.name),
        Expr::Number(number) => out.push_str(&number.value.to_string()),
        Expr::Comparison(cmp) => {
            emit(&cmp.left, out)?;
            out.push(' ');
            out.push_str(cmp.op.target_symbol());
            out.push(' ');
            emit(&cmp.right, out)?;
        }
        Expr::Logical(logical) => {
            out.push('(');
            emit(&logical.left, out)?;
            out.push(' ');
            out.push_str(logical.op.target_symbol());
            out.push(' ');
            emit(&logical.right, out)?;
            out.push(')');
        }
        Expr::Negation(negation) => match negation.inner.as_ref() {
            inner @ Expr::Logical(_) => {
                out.push('!');
                emit(inner, out)?;
            }
            inner @ Expr::Comparison(_) => {
                out.push_str("!(");
                emit(inner, out)?;
                out.push(')');
            }
            inner => {
                return Err(SemanticError::UnsupportedExpression {
                    expr: inner.to_string(),
                    span: negation.span,
                });
            }
        },
    }

    Ok(())
}
