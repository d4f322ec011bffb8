use pretty_assertions::assert_eq;
use quire_sql::{
    stmt::{Expr, ExprColumn, OrderByExpr, Query, Select, TableRef, UnionFlag, UnionRules},
    Bind, Serializer,
};
use std_util::prelude::*;

struct NoParams;

impl quire_sql::Params for NoParams {
    fn push(&mut self, _: &quire_sql::stmt::Value) -> quire_sql::Placeholder {
        quire_sql::Placeholder(0)
    }

    fn push_param(&mut self, _: &quire_sql::stmt::ExprParam) -> quire_sql::Placeholder {
        quire_sql::Placeholder(0)
    }
}

fn select(column: &str, table: &str) -> Query {
    Select::new([Expr::column(column)]).table(table).into()
}

fn render(serializer: &Serializer, query: &Query) -> String {
    serializer.render(query, &mut NoParams)
}

#[test]
fn union_keeps_double_space() {
    let query = assert_ok!(select("a", "t").union(select("b", "u")));

    assert_eq!(
        render(&Serializer::postgresql(), &query),
        "SELECT a FROM t UNION  SELECT b FROM u"
    );
}

#[test]
fn union_all() {
    let query = assert_ok!(select("a", "t").union_all(select("b", "u")));

    assert_eq!(
        render(&Serializer::postgresql(), &query),
        "SELECT a FROM t UNION ALL SELECT b FROM u"
    );
}

#[test]
fn union_is_operands_joined_by_keyword() {
    let lhs = Query::from(
        Select::new([Expr::column("id"), Expr::column("name")])
            .table(TableRef::aliased("users", "u"))
            .and(Expr::eq(Expr::column(ExprColumn::qualified("u", "active")), true)),
    );
    let rhs = select("id", "Archive");
    let serializer = Serializer::sqlite();

    for flag in [UnionFlag::Distinct, UnionFlag::All] {
        let query = assert_ok!(lhs
            .clone()
            .union_with(flag, rhs.clone(), &UnionRules::default()));

        let keyword = if flag.is_all() { "ALL" } else { "" };
        let expected = format!(
            "{} UNION {} {}",
            render(&serializer, &lhs),
            keyword,
            render(&serializer, &rhs)
        );

        assert_eq!(render(&serializer, &query), expected);
    }
}

#[test]
fn normalized_spacing() {
    let serializer = Serializer::mysql().normalize_union_spacing(true);

    let query = assert_ok!(select("a", "t").union(select("b", "u")));
    assert_eq!(
        render(&serializer, &query),
        "SELECT a FROM t UNION SELECT b FROM u"
    );

    let query = assert_ok!(select("a", "t").union_all(select("b", "u")));
    assert_eq!(
        render(&serializer, &query),
        "SELECT a FROM t UNION ALL SELECT b FROM u"
    );
}

#[test]
fn rendering_is_idempotent() {
    let query = assert_ok!(select("a", "t").union(select("b", "u")));
    let serializer = Serializer::postgresql();

    let first = serializer.prepare(&query);
    let second = serializer.prepare(&query);
    assert_eq!(first, second);
}

#[test]
fn serialize_terminates_statement() {
    let query = assert_ok!(select("a", "t").union_all(select("b", "u")));

    assert_eq!(
        Serializer::sqlite().serialize(&query, &mut NoParams),
        "SELECT a FROM t UNION ALL SELECT b FROM u;"
    );
}

#[test]
fn ordered_operand_renders_inside_union() {
    let lhs = select("a", "t").order_by(OrderByExpr::asc(Expr::column("a")));
    let query = assert_ok!(lhs.union(select("b", "u")));

    assert_eq!(
        render(&Serializer::postgresql(), &query),
        "SELECT a FROM t ORDER BY a ASC UNION  SELECT b FROM u"
    );
}

#[test]
fn outer_order_by_follows_union() {
    let query = assert_ok!(select("a", "t").union_all(select("b", "u")))
        .order_by(OrderByExpr::desc(Expr::column("a")));

    assert_eq!(
        render(&Serializer::postgresql(), &query),
        "SELECT a FROM t UNION ALL SELECT b FROM u ORDER BY a DESC"
    );
}

#[test]
fn left_nested_unions() {
    let query = assert_ok!(select("a", "t").union(select("b", "u")));
    let query = assert_ok!(query.union_all(select("c", "v")));

    assert_eq!(
        render(&Serializer::postgresql(), &query),
        "SELECT a FROM t UNION  SELECT b FROM u UNION ALL SELECT c FROM v"
    );
}

#[test]
fn union_as_derived_table_with_limit() {
    let union = assert_ok!(select("a", "t").union(select("b", "u")));
    let query = Query::from(Select::new([Expr::column("a")]).table(union.derived("combined")))
        .limit(10);

    let prepared = Serializer::postgresql().prepare(&query);
    assert_eq!(
        prepared.sql,
        "SELECT a FROM (SELECT a FROM t UNION  SELECT b FROM u) AS combined LIMIT $1"
    );
    assert_eq!(prepared.binds, [Bind::Value(10.into())]);
}

#[test]
fn placeholders_number_left_then_right() {
    let lhs = Query::from(
        Select::new([Expr::column("a")])
            .table("t")
            .and(Expr::eq(Expr::column("x"), Expr::param("x"))),
    );
    let rhs = Query::from(
        Select::new([Expr::column("b")])
            .table("u")
            .and(Expr::gt(Expr::column("y"), 5)),
    );
    let query = assert_ok!(lhs.union(rhs));

    let prepared = Serializer::postgresql().prepare(&query);
    assert_eq!(
        prepared.sql,
        "SELECT a FROM t WHERE x = $1 UNION  SELECT b FROM u WHERE y > $2"
    );

    let prepared = Serializer::sqlite().prepare(&query);
    assert_eq!(
        prepared.sql,
        "SELECT a FROM t WHERE x = ?1 UNION  SELECT b FROM u WHERE y > ?2"
    );

    let prepared = Serializer::mysql().prepare(&query);
    assert_eq!(
        prepared.sql,
        "SELECT a FROM t WHERE x = ? UNION  SELECT b FROM u WHERE y > ?"
    );
}
