use rossoc_parser::lexer::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = Lexer::new(source).tokenize();
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_keywords_are_case_insensitive() {
    assert_eq!(
        kinds("select Select SELECT from WHERE and Or nOt rsleep RSPEED"),
        vec![
            TokenKind::Select,
            TokenKind::Select,
            TokenKind::Select,
            TokenKind::From,
            TokenKind::Where,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Rsleep,
            TokenKind::Rspeed,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_full_query_tokens() {
    assert_eq!(
        kinds("select DIN1 from `board` where din1 != -2.5;"),
        vec![
            TokenKind::Select,
            TokenKind::Ident,
            TokenKind::From,
            TokenKind::QuotedIdent,
            TokenKind::Where,
            TokenKind::Ident,
            TokenKind::NotEqual,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comparison_operators_take_longest_match() {
    assert_eq!(
        kinds("= == <> != < <= > >="),
        vec![
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::LessGreater,
            TokenKind::NotEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    assert_eq!(
        kinds("selection fromage order_id"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_whitespace_and_newlines_are_skipped() {
    let (tokens, _) = Lexer::new("SELECT\n\tdin1\r\n  FROM board").tokenize();
    let din1 = tokens[1];
    assert_eq!(din1.kind, TokenKind::Ident);
    assert_eq!(u32::from(din1.start()), 8);
    assert_eq!(u32::from(din1.end()), 12);
}

#[test]
fn test_eof_is_positioned_at_end() {
    let source = "SELECT din1";
    let (tokens, _) = Lexer::new(source).tokenize();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert!(eof.span.is_empty());
    assert_eq!(u32::from(eof.start()) as usize, source.len());
}

#[test]
fn test_invalid_characters_are_reported() {
    let (tokens, errors) = Lexer::new("din1 & din2").tokenize();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code().to_string(), "E1001");
    assert_eq!(u32::from(errors[0].span.start()), 5);
    // lexing continues past the bad character
    assert_eq!(tokens.len(), 3);
}
