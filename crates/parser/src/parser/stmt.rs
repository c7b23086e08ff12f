use super::types::Parser;
use crate::ast::*;
use crate::error::ParseResult;
use crate::lexer::TokenKind;
use smallvec::SmallVec;
use text_size::TextRange;

impl<'src> Parser<'src> {
    /// query := SELECT columns FROM target [WHERE condition] [RSLEEP n] [RSPEED n] [';']
    pub(super) fn parse_query(&mut self) -> ParseResult<Query> {
        let start = self.consume(TokenKind::Select)?.span.start();

        let mut columns = SmallVec::new();
        loop {
            columns.push(self.parse_identifier("column name")?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        self.consume(TokenKind::From)?;
        let target = self.parse_identifier("target name")?;
        let table = TableRef {
            name: target.name,
            span: target.span,
        };

        let condition = if self.match_token(TokenKind::Where) {
            Some(self.parse_condition()?)
        } else {
            None
        };

        let rsleep = if self.match_token(TokenKind::Rsleep) {
            Some(self.parse_number()?)
        } else {
            None
        };

        let rspeed = if self.match_token(TokenKind::Rspeed) {
            Some(self.parse_number()?)
        } else {
            None
        };

        self.match_token(TokenKind::Semicolon);

        if !self.is_at_end() {
            return Err(self.unexpected(trailing_expectation(
                condition.is_some(),
                rsleep.is_some(),
                rspeed.is_some(),
            )));
        }

        let span = TextRange::new(start, self.prev().span.end());
        tracing::debug!(
            columns = columns.len(),
            target_name = %table.name,
            has_condition = condition.is_some(),
            "parsed query"
        );

        Ok(Query {
            columns,
            table,
            condition,
            rsleep,
            rspeed,
            span,
        })
    }
}

/// What could still legally follow, given the clauses already seen.
fn trailing_expectation(has_where: bool, has_rsleep: bool, has_rspeed: bool) -> &'static str {
    match (has_where, has_rsleep, has_rspeed) {
        (_, _, true) => "end of query",
        (_, true, false) => "RSPEED or end of query",
        (true, false, false) => "RSLEEP, RSPEED or end of query",
        (false, false, false) => "WHERE, RSLEEP, RSPEED or end of query",
    }
}
