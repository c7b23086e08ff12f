use super::types::Parser;
use crate::ast::*;
use crate::error::{ErrorKind, ParseResult, error};
use crate::lexer::TokenKind;
use text_size::TextRange;

impl<'src> Parser<'src> {
    /// condition := or_expr
    pub(super) fn parse_condition(&mut self) -> ParseResult<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;

        while self.match_token(TokenKind::Or) {
            let right = self.parse_and()?;
            left = logical(LogicalOp::Or, left, right);
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_not()?;

        while self.match_token(TokenKind::And) {
            let right = self.parse_not()?;
            left = logical(LogicalOp::And, left, right);
        }

        Ok(left)
    }

    fn parse_not(&mut self) -> ParseResult<Expr> {
        if self.peek().kind == TokenKind::Not {
            let start = self.advance().span.start();
            let inner = self.parse_not()?;
            let span = TextRange::new(start, self.prev().span.end());
            return Ok(Expr::Negation(NegationExpr {
                inner: Box::new(inner),
                span,
            }));
        }

        self.parse_predicate()
    }

    /// predicate := '(' condition ')' | operand compop operand
    fn parse_predicate(&mut self) -> ParseResult<Expr> {
        let token = self.peek();
        match token.kind {
            TokenKind::LeftParen => {
                self.open_delimiter();
                let inner = self.parse_or()?;
                self.close_delimiter()?;
                Ok(inner)
            }
            TokenKind::Ident
            | TokenKind::QuotedIdent
            | TokenKind::Number
            | TokenKind::Minus
            | TokenKind::Plus => {
                let left = self.parse_operand()?;
                let op = self.parse_comparison_op()?;
                let right = self.parse_operand()?;
                let span = TextRange::new(left.span().start(), right.span().end());
                Ok(Expr::Comparison(ComparisonExpr {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                }))
            }
            TokenKind::Eof | TokenKind::RightParen => Err(self.unexpected("condition")),
            _ => Err(error(
                ErrorKind::ExpectedCondition {
                    found: self.text(token).to_string(),
                },
                token.span,
            )),
        }
    }

    fn parse_comparison_op(&mut self) -> ParseResult<ComparisonOp> {
        let op = match self.peek().kind {
            TokenKind::Equal => ComparisonOp::Eq,
            TokenKind::NotEqual | TokenKind::LessGreater => ComparisonOp::NotEq,
            TokenKind::Less => ComparisonOp::Lt,
            TokenKind::LessEqual => ComparisonOp::LtE,
            TokenKind::Greater => ComparisonOp::Gt,
            TokenKind::GreaterEqual => ComparisonOp::GtE,
            _ => return Err(self.unexpected("comparison operator")),
        };
        self.advance();
        Ok(op)
    }

    /// operand := identifier | ['-' | '+'] number
    fn parse_operand(&mut self) -> ParseResult<Expr> {
        match self.peek().kind {
            TokenKind::Ident | TokenKind::QuotedIdent => {
                Ok(Expr::Column(self.parse_identifier("column name")?))
            }
            TokenKind::Number | TokenKind::Minus | TokenKind::Plus => {
                Ok(Expr::Number(self.parse_number()?))
            }
            _ => Err(self.unexpected("column name or number")),
        }
    }

    /// Parse an identifier, stripping backtick quotes.
    pub(super) fn parse_identifier(&mut self, expected: &str) -> ParseResult<ColumnRef> {
        let token = self.peek();
        let (name, quoted) = match token.kind {
            TokenKind::Ident => (self.text(token), false),
            TokenKind::QuotedIdent => {
                let text = self.text(token);
                (&text[1..text.len() - 1], true)
            }
            _ => return Err(self.unexpected(expected)),
        };
        self.advance();

        Ok(ColumnRef {
            name: name.to_string(),
            quoted,
            span: token.span,
        })
    }

    /// Parse a numeric literal with an optional sign.
    pub(super) fn parse_number(&mut self) -> ParseResult<NumericLiteral> {
        let start = self.peek().span.start();
        let negative = match self.peek().kind {
            TokenKind::Minus => {
                self.advance();
                true
            }
            TokenKind::Plus => {
                self.advance();
                false
            }
            _ => false,
        };

        let token = self.consume(TokenKind::Number)?;
        let text = self.text(token);
        let value = if text.contains(['.', 'e', 'E']) {
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Number::Float)
        } else {
            text.parse::<i64>().ok().map(Number::Int)
        };
        let value = value.ok_or_else(|| error(ErrorKind::InvalidNumber, token.span))?;

        Ok(NumericLiteral {
            value: if negative { value.negate() } else { value },
            span: TextRange::new(start, token.span.end()),
        })
    }
}

fn logical(op: LogicalOp, left: Expr, right: Expr) -> Expr {
    let span = TextRange::new(left.span().start(), right.span().end());
    Expr::Logical(LogicalExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
        span,
    })
}
