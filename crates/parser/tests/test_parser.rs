use pretty_assertions::assert_eq;
use rossoc_parser::ast::{ComparisonOp, Expr, LogicalOp, Number};
use rossoc_parser::parse_query;

fn canonical(source: &str) -> String {
    parse_query(source)
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
        .to_string()
}

fn condition(source: &str) -> Expr {
    parse_query(source).unwrap().condition.unwrap()
}

#[test]
fn test_minimal_query() {
    let query = parse_query("SELECT din1 FROM board").unwrap();
    assert_eq!(query.columns.len(), 1);
    assert_eq!(query.columns[0].name, "din1");
    assert!(!query.columns[0].quoted);
    assert_eq!(query.table.name, "board");
    assert!(query.condition.is_none());
    assert!(query.rsleep.is_none());
    assert!(query.rspeed.is_none());
}

#[test]
fn test_columns_keep_source_order() {
    let query = parse_query("SELECT ain3, din1, `din0` FROM dev").unwrap();
    let names: Vec<_> = query.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ain3", "din1", "din0"]);
    assert!(query.columns[2].quoted);
}

#[test]
fn test_trailing_clauses() {
    let query = parse_query("select din1, ain2 from arduino rsleep 0.25 rspeed 115200;").unwrap();
    assert_eq!(query.rsleep.unwrap().value, Number::Float(0.25));
    assert_eq!(query.rspeed.unwrap().value, Number::Int(115200));
}

#[test]
fn test_and_binds_tighter_than_or() {
    let expr = condition("SELECT din1 FROM board WHERE din1 = 0 OR din2 = 1 AND din3 = 2");
    let Expr::Logical(or) = expr else {
        panic!("expected OR at the root");
    };
    assert_eq!(or.op, LogicalOp::Or);
    assert!(matches!(*or.left, Expr::Comparison(_)));
    assert!(matches!(&*or.right, Expr::Logical(and) if and.op == LogicalOp::And));
}

#[test]
fn test_not_binds_tighter_than_and() {
    assert_eq!(
        canonical("SELECT din1 FROM board WHERE NOT din1 = 0 AND din2 = 1"),
        "SELECT `din1` FROM `board` WHERE (NOT (`din1` = 0) AND `din2` = 1)"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        canonical("SELECT din1 FROM board WHERE (din1 = 0 OR din2 = 1) AND din3 = 2"),
        "SELECT `din1` FROM `board` WHERE ((`din1` = 0 OR `din2` = 1) AND `din3` = 2)"
    );
}

#[test]
fn test_not_over_parenthesised_condition() {
    assert_eq!(
        canonical("SELECT din1 FROM board WHERE NOT (din1 = 0 OR din2 = 1)"),
        "SELECT `din1` FROM `board` WHERE NOT (`din1` = 0 OR `din2` = 1)"
    );
}

#[test]
fn test_redundant_parentheses_are_dropped() {
    assert_eq!(
        canonical("SELECT din1 FROM board WHERE ((((din1 = 0))))"),
        "SELECT `din1` FROM `board` WHERE `din1` = 0"
    );
}

#[test]
fn test_bang_equal_prints_as_angle_brackets() {
    let expr = condition("SELECT din1 FROM board WHERE din1 != 3");
    assert!(matches!(&expr, Expr::Comparison(c) if c.op == ComparisonOp::NotEq));
    assert_eq!(expr.to_string(), "`din1` <> 3");
}

#[test]
fn test_every_comparison_operator() {
    for (op, expected) in [
        ("=", ComparisonOp::Eq),
        ("<>", ComparisonOp::NotEq),
        ("!=", ComparisonOp::NotEq),
        ("<", ComparisonOp::Lt),
        ("<=", ComparisonOp::LtE),
        (">", ComparisonOp::Gt),
        (">=", ComparisonOp::GtE),
    ] {
        let expr = condition(&format!("SELECT ain0 FROM dev WHERE ain0 {op} 512"));
        assert!(
            matches!(&expr, Expr::Comparison(c) if c.op == expected),
            "operator {op}"
        );
    }
}

#[test]
fn test_signed_and_float_literals() {
    assert_eq!(
        canonical("SELECT ain1 FROM dev WHERE ain1 > -5 AND 1e3 >= +2.5 RSLEEP 100.0"),
        "SELECT `ain1` FROM `dev` WHERE (`ain1` > -5 AND 1000.0 >= 2.5) RSLEEP 100.0"
    );
}

#[test]
fn test_literal_on_either_side() {
    let Expr::Comparison(cmp) = condition("SELECT din1 FROM board WHERE 0 = din1") else {
        panic!("expected comparison");
    };
    assert!(matches!(*cmp.left, Expr::Number(_)));
    assert!(matches!(*cmp.right, Expr::Column(_)));
}

#[test]
fn test_canonical_form_reparses_to_itself() {
    let sources = [
        "SELECT din1 FROM board WHERE ((din1 = 0 AND din2 <= 1) OR din3 <> 9) RSLEEP 100",
        "select ain5, din2 from mruby where not (ain5 > 100 or din2 != 1) rspeed 19200",
        "SELECT din0 FROM arduino WHERE NOT NOT din0 = 1 RSLEEP 0.5 RSPEED 9600;",
    ];

    for source in sources {
        let once = canonical(source);
        assert_eq!(canonical(&once), once, "source: {source}");
    }
}

#[test]
fn test_spans_cover_the_query() {
    let source = "SELECT din1 FROM board WHERE din1 = 0";
    let query = parse_query(source).unwrap();
    assert_eq!(u32::from(query.span.start()), 0);
    assert_eq!(u32::from(query.span.end()) as usize, source.len());

    let cond = query.condition.unwrap();
    assert_eq!(&source[cond.span()], "din1 = 0");
}
